/// Direction of the most recent navigation. Only drives the slide
/// transition; no business rule depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// Arrow hinting where new content slides in from.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Backward => "◀",
            Direction::Still => " ",
            Direction::Forward => "▶",
        }
    }
}
