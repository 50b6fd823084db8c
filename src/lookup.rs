use crate::roster::{Record, Roster};

/// Case-insensitive exact match on the display name. When several entries
/// share a name, the earliest inserted one wins.
pub fn find_id_by_name<'a, T: Record>(roster: &'a Roster<T>, name: &str) -> Option<&'a str> {
    let wanted = name.to_lowercase();
    roster
        .iter()
        .find(|entry| entry.name().to_lowercase() == wanted)
        .map(|entry| entry.id())
}
