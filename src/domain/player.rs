/// The signed-in user as reported by the authentication collaborator.
///
/// The crate never validates credentials; it only honours `can_play`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Player {
    pub id: String,
    pub can_play: bool,
}

impl Player {
    pub fn new(id: &str, can_play: bool) -> Self {
        Self {
            id: id.to_string(),
            can_play,
        }
    }
}
