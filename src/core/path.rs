use serde::{Deserialize, Serialize};

/// One command of a filled vector path.
///
/// Arcs are circular and carry both parameterizations: endpoint form for
/// SVG-like surfaces and center/angle form for Cairo-like surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    ArcTo {
        center_x: f64,
        center_y: f64,
        radius: f64,
        start_angle_deg: f64,
        sweep_angle_deg: f64,
        large_arc: bool,
        clockwise: bool,
        end_x: f64,
        end_y: f64,
    },
    Close,
}

impl PathCommand {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match *self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::ArcTo {
                center_x,
                center_y,
                radius,
                start_angle_deg,
                sweep_angle_deg,
                end_x,
                end_y,
                ..
            } => [
                center_x,
                center_y,
                radius,
                start_angle_deg,
                sweep_angle_deg,
                end_x,
                end_y,
            ]
            .iter()
            .all(|v| v.is_finite()),
            Self::Close => true,
        }
    }
}

/// Standard polar-to-Cartesian conversion in a y-down surface.
///
/// `0°` points along +x and angles grow clockwise on screen.
#[must_use]
pub fn polar_to_cartesian(
    center_x: f64,
    center_y: f64,
    radius: f64,
    angle_deg: f64,
) -> (f64, f64) {
    let radians = angle_deg * std::f64::consts::PI / 180.0;
    (
        center_x + radius * radians.cos(),
        center_y + radius * radians.sin(),
    )
}
