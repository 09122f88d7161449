use std::marker::PhantomData;

use crate::ui::direction::Direction;
use crate::ui::mvi::Reducer;

use super::gesture::resolve_swipe;
use super::intent::CarouselIntent;
use super::state::CarouselState;

/// Reducer for carousels over items of type `T`.
pub struct CarouselReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for CarouselReducer<T> {
    type State = CarouselState<T>;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::SetPageSize(size) => set_page_size(state, size),
            CarouselIntent::Paginate(direction) => paginate(state, direction),
            CarouselIntent::GoTo(index) => go_to(state, index),
            CarouselIntent::ReleaseDrag {
                offset_x,
                velocity_x,
            } => {
                if !state.controls_visible() {
                    return state;
                }
                match resolve_swipe(offset_x, velocity_x, state.swipe_threshold) {
                    Some(direction) => paginate(state, direction),
                    None => state,
                }
            }
        }
    }
}

fn set_page_size<T>(mut state: CarouselState<T>, size: usize) -> CarouselState<T> {
    if size == 0 || size == state.page_size {
        return state;
    }
    state.page_size = size;
    let total = state.total_pages();
    if total > 0 && state.page >= total {
        state.page = total - 1;
        state.direction = Direction::Still;
    }
    state
}

fn paginate<T>(mut state: CarouselState<T>, direction: Direction) -> CarouselState<T> {
    let total = state.total_pages();
    if total <= 1 || direction == Direction::Still {
        return state;
    }
    state.page = match direction {
        Direction::Backward => (state.page + total - 1) % total,
        _ => (state.page + 1) % total,
    };
    state.direction = direction;
    state
}

fn go_to<T>(mut state: CarouselState<T>, index: usize) -> CarouselState<T> {
    if index >= state.total_pages() {
        return state;
    }
    state.direction = if index > state.page {
        Direction::Forward
    } else {
        Direction::Backward
    };
    state.page = index;
    state
}
