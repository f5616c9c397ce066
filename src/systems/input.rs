//! End-of-tick input settling.

use bevy_ecs::prelude::*;

use crate::resources::input::InputState;

/// Clear the just-pressed and just-released edges after every system has
/// seen them.
pub fn settle_input(mut input: ResMut<InputState>) {
    input.settle();
}
