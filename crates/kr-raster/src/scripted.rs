//! Robot de test : un `GridWorld` dont certains capteurs mentent.

use kr_core::{ColorName, Heading, Robot, RobotError};
use kr_world::GridWorld;

/// Wraps a [`GridWorld`] and overrides selected sensor answers.
pub struct Scripted {
    pub world: GridWorld,
    /// Front reported blocked whenever the robot faces this heading.
    pub wall_ahead_when: Option<Heading>,
    /// `facing` always answers `false`.
    pub lost: bool,
}

impl Scripted {
    pub fn new(world: GridWorld) -> Self {
        Self {
            world,
            wall_ahead_when: None,
            lost: false,
        }
    }
}

impl Robot for Scripted {
    fn move_forward(&mut self) -> Result<(), RobotError> {
        self.world.move_forward()
    }

    fn turn_left(&mut self) {
        self.world.turn_left();
    }

    fn turn_right(&mut self) {
        self.world.turn_right();
    }

    fn front_is_clear(&self) -> bool {
        if self.wall_ahead_when == Some(self.world.heading()) {
            return false;
        }
        self.world.front_is_clear()
    }

    fn left_is_blocked(&self) -> bool {
        self.world.left_is_blocked()
    }

    fn right_is_blocked(&self) -> bool {
        self.world.right_is_blocked()
    }

    fn facing(&self, heading: Heading) -> bool {
        !self.lost && self.world.facing(heading)
    }

    fn paint(&mut self, color: ColorName) -> Result<(), RobotError> {
        self.world.paint(color)
    }

    fn put_marker(&mut self) -> Result<(), RobotError> {
        self.world.put_marker()
    }

    fn markers_present(&self) -> bool {
        self.world.markers_present()
    }

    fn take_marker(&mut self) -> Result<(), RobotError> {
        self.world.take_marker()
    }
}
