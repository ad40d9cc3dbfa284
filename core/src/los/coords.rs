use crate::game_data::{LOS_COORD_OFFSET_X, LOS_COORD_OFFSET_Y};
use crate::world::Position;

/// Convert a scene position to LoS grid coordinates.
pub const fn to_los_space(scene: Position) -> Position {
    Position {
        x: scene.x - LOS_COORD_OFFSET_X,
        y: LOS_COORD_OFFSET_Y - scene.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_origin_maps_to_zero() {
        assert_eq!(to_los_space(Position::new(32, 83)), Position::new(0, 0));
    }

    #[test]
    fn y_axis_is_flipped() {
        assert_eq!(to_los_space(Position::new(42, 90)), Position::new(10, -7));
        assert_eq!(to_los_space(Position::new(50, 60)), Position::new(18, 23));
    }

    #[test]
    fn each_axis_moves_independently() {
        let base = to_los_space(Position::new(40, 70));
        let right = to_los_space(Position::new(41, 70));
        let up = to_los_space(Position::new(40, 71));
        assert_eq!((right.x - base.x, right.y - base.y), (1, 0));
        assert_eq!((up.x - base.x, up.y - base.y), (0, -1));
    }
}
