use phf::{Map, phf_map};

/// Atom names whose element is not the first alphabetic character of the name.
/// Everything else (CA, CB, OXT, N, H1, ...) resolves through the fallback rule.
static ATOM_NAME_ELEMENTS: Map<&'static str, &'static str> = phf_map! {
    "SD" => "S", "SG" => "S",
    "FE" => "FE", "ZN" => "ZN", "MG" => "MG", "MN" => "MN",
    "NA" => "NA", "CL" => "CL", "CA2" => "CA", "K" => "K",
    "SE" => "SE", "BR" => "BR",
};

/// Infers the element symbol from a PDB-style atom name.
///
/// Known multi-character cases are table-driven; otherwise the first alphabetic
/// character is taken (so "CA" is carbon, "1HB" is hydrogen). Returns `None`
/// for names with no alphabetic character.
pub fn element_from_atom_name(atom_name: &str) -> Option<&'static str> {
    let trimmed = atom_name.trim();
    if let Some(element) = ATOM_NAME_ELEMENTS.get(trimmed) {
        return Some(element);
    }
    match trimmed
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
    {
        Some('H') | Some('D') => Some("H"),
        Some('C') => Some("C"),
        Some('N') => Some("N"),
        Some('O') => Some("O"),
        Some('S') => Some("S"),
        Some('P') => Some("P"),
        _ => None,
    }
}

/// Returns `true` if the atom name denotes a non-hydrogen atom.
pub fn is_heavy_atom(atom_name: &str) -> bool {
    let first_char = atom_name
        .trim()
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase());
    !matches!(first_char, Some('H') | Some('D'))
}
