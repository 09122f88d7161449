use crate::ui::direction::Direction;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselIntent {
    /// New page size from the breakpoint policy; 0 is ignored.
    SetPageSize(usize),
    /// One page forward or backward, wrapping around. `Still` is ignored.
    Paginate(Direction),
    /// Jump to a page (dot indicator); out of range is ignored.
    GoTo(usize),
    /// End of a drag gesture, in px and px/s.
    ReleaseDrag { offset_x: f32, velocity_x: f32 },
}

impl Intent for CarouselIntent {}
