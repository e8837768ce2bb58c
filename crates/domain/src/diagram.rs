//! Front and back anatomical silhouettes styled by muscle activation.
//!
//! The geometry is fixed reference data in a 300 x 600 view box. Each region shape names the
//! regions it represents and takes the style of the highest activation level among them.

use crate::{ActivationLevel, ActivationMap, ActivationScheme, Property, Region};

pub const VIEW_BOX: (u32, u32) = (300, 600);

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum View {
    #[default]
    Front,
    Back,
}

impl Property for View {
    fn iter() -> std::slice::Iter<'static, View> {
        static VIEWS: [View; 2] = [View::Front, View::Back];
        VIEWS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            View::Front => "Front",
            View::Back => "Back",
        }
    }
}

impl View {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            View::Front => View::Back,
            View::Back => View::Front,
        }
    }

    #[must_use]
    pub fn shapes(self) -> &'static [RegionShape] {
        match self {
            View::Front => FRONT,
            View::Back => BACK,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Path { d: &'static str },
    Ellipse { cx: f32, cy: f32, rx: f32, ry: f32 },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
    },
}

#[derive(Debug, PartialEq)]
pub struct RegionShape {
    pub id: &'static str,
    pub regions: &'static [Region],
    pub shape: Shape,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub fill: &'static str,
    pub fill_opacity: f32,
    pub stroke: &'static str,
    pub stroke_width: f32,
}

impl Style {
    pub const UNTARGETED: Style = Style {
        fill: "#f5f5f5",
        fill_opacity: 0.1,
        stroke: "#e0e0e0",
        stroke_width: 1.5,
    };

    pub const OUTLINE: Style = Style {
        fill: "none",
        fill_opacity: 1.0,
        stroke: "#cbd5e1",
        stroke_width: 2.0,
    };

    #[must_use]
    pub fn of(level: Option<ActivationLevel>) -> Style {
        level.map_or(Style::UNTARGETED, |l| LEVEL_STYLES[l as usize])
    }
}

// Indexed by activation level
const LEVEL_STYLES: [Style; 3] = [
    Style {
        fill: "#ffaa88",
        fill_opacity: 0.3,
        stroke: "#ee9977",
        stroke_width: 2.0,
    },
    Style {
        fill: "#ff8855",
        fill_opacity: 0.5,
        stroke: "#dd6644",
        stroke_width: 2.5,
    },
    Style {
        fill: "#ff4444",
        fill_opacity: 0.7,
        stroke: "#cc3333",
        stroke_width: 3.0,
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct StyledShape {
    pub id: &'static str,
    pub shape: Shape,
    pub level: Option<ActivationLevel>,
    pub style: Style,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Diagram {
    pub view: View,
    pub outline: &'static [Shape],
    pub shapes: Vec<StyledShape>,
}

impl Diagram {
    #[must_use]
    pub fn level(&self, id: &str) -> Option<ActivationLevel> {
        self.shapes
            .iter()
            .find(|s| s.id == id)
            .and_then(|s| s.level)
    }
}

#[must_use]
pub fn render(view: View, activation: &ActivationMap) -> Diagram {
    Diagram {
        view,
        outline: OUTLINE,
        shapes: view
            .shapes()
            .iter()
            .map(|s| {
                let level = activation.max_level(s.regions);
                StyledShape {
                    id: s.id,
                    shape: s.shape,
                    level,
                    style: Style::of(level),
                }
            })
            .collect(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub style: Style,
}

#[must_use]
pub fn legend(scheme: ActivationScheme) -> Vec<LegendEntry> {
    let targeted: Vec<LegendEntry> = match scheme {
        ActivationScheme::Tiered => ActivationLevel::iter()
            .map(|l| LegendEntry {
                label: l.name(),
                style: Style::of(Some(*l)),
            })
            .collect(),
        ActivationScheme::Binary => vec![LegendEntry {
            label: "Targeted",
            style: Style::of(Some(ActivationLevel::Primary)),
        }],
    };
    [
        targeted,
        vec![LegendEntry {
            label: "Not Targeted",
            style: Style::UNTARGETED,
        }],
    ]
    .concat()
}

/// View state of a muscle diagram.
///
/// The view can only be changed while the toggle is shown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MuscleDiagram {
    view: View,
    show_toggle: bool,
}

impl Default for MuscleDiagram {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MuscleDiagram {
    #[must_use]
    pub fn new(show_toggle: bool) -> Self {
        Self {
            view: View::Front,
            show_toggle,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn show_toggle(&self) -> bool {
        self.show_toggle
    }

    pub fn select_view(&mut self, view: View) {
        if self.show_toggle {
            self.view = view;
        }
    }

    pub fn toggle_view(&mut self) {
        self.select_view(self.view.toggled());
    }

    #[must_use]
    pub fn render(&self, activation: &ActivationMap) -> Diagram {
        render(self.view, activation)
    }
}

pub const OUTLINE: &[Shape] = &[
    // Head
    Shape::Ellipse {
        cx: 150.,
        cy: 40.,
        rx: 30.,
        ry: 35.,
    },
    // Neck
    Shape::Path {
        d: "M 130 75 L 130 95 L 170 95 L 170 75",
    },
    // Torso
    Shape::Path {
        d: "M 130 95 L 100 120 L 90 250 L 110 350 L 140 420 L 150 420 L 160 420 L 190 350 L 210 250 L 200 120 L 170 95",
    },
    // Arms
    Shape::Path {
        d: "M 100 120 L 70 130 L 60 220 L 65 280 L 70 290",
    },
    Shape::Path {
        d: "M 200 120 L 230 130 L 240 220 L 235 280 L 230 290",
    },
    // Legs
    Shape::Path {
        d: "M 140 420 L 135 480 L 130 560 L 125 590",
    },
    Shape::Path {
        d: "M 160 420 L 165 480 L 170 560 L 175 590",
    },
];

const CHEST: &[Region] = &[Region::Chest, Region::ChestUpper, Region::ChestLower];
// Deltoids is the only region drawn in both views
const FRONT_DELTS: &[Region] = &[
    Region::DeltoidsFront,
    Region::DeltoidsSide,
    Region::Deltoids,
];
const REAR_DELTS: &[Region] = &[Region::DeltoidsRear, Region::Deltoids];

const FRONT: &[RegionShape] = &[
    RegionShape {
        id: "chest-left",
        regions: CHEST,
        shape: Shape::Path {
            d: "M 130 110 Q 115 130 110 155 L 140 175 L 150 170 L 150 110 Z",
        },
    },
    RegionShape {
        id: "chest-right",
        regions: CHEST,
        shape: Shape::Path {
            d: "M 170 110 Q 185 130 190 155 L 160 175 L 150 170 L 150 110 Z",
        },
    },
    RegionShape {
        id: "abs-upper",
        regions: &[Region::Abs],
        shape: Shape::Rect {
            x: 135.,
            y: 180.,
            width: 30.,
            height: 35.,
            rx: 3.,
        },
    },
    RegionShape {
        id: "abs-middle",
        regions: &[Region::Abs],
        shape: Shape::Rect {
            x: 135.,
            y: 220.,
            width: 30.,
            height: 35.,
            rx: 3.,
        },
    },
    RegionShape {
        id: "abs-lower",
        regions: &[Region::Abs],
        shape: Shape::Rect {
            x: 135.,
            y: 260.,
            width: 30.,
            height: 35.,
            rx: 3.,
        },
    },
    RegionShape {
        id: "obliques-left",
        regions: &[Region::Obliques],
        shape: Shape::Path {
            d: "M 110 180 Q 100 210 95 250 L 110 250 L 120 220 L 115 180 Z",
        },
    },
    RegionShape {
        id: "obliques-right",
        regions: &[Region::Obliques],
        shape: Shape::Path {
            d: "M 190 180 Q 200 210 205 250 L 190 250 L 180 220 L 185 180 Z",
        },
    },
    RegionShape {
        id: "deltoids-front-left",
        regions: FRONT_DELTS,
        shape: Shape::Ellipse {
            cx: 100.,
            cy: 120.,
            rx: 18.,
            ry: 25.,
        },
    },
    RegionShape {
        id: "deltoids-front-right",
        regions: FRONT_DELTS,
        shape: Shape::Ellipse {
            cx: 200.,
            cy: 120.,
            rx: 18.,
            ry: 25.,
        },
    },
    RegionShape {
        id: "biceps-left",
        regions: &[Region::Biceps],
        shape: Shape::Ellipse {
            cx: 70.,
            cy: 170.,
            rx: 12.,
            ry: 28.,
        },
    },
    RegionShape {
        id: "biceps-right",
        regions: &[Region::Biceps],
        shape: Shape::Ellipse {
            cx: 230.,
            cy: 170.,
            rx: 12.,
            ry: 28.,
        },
    },
    RegionShape {
        id: "forearms-left",
        regions: &[Region::Forearms],
        shape: Shape::Path {
            d: "M 65 220 L 60 260 L 68 280 L 72 260 L 70 220 Z",
        },
    },
    RegionShape {
        id: "forearms-right",
        regions: &[Region::Forearms],
        shape: Shape::Path {
            d: "M 235 220 L 240 260 L 232 280 L 228 260 L 230 220 Z",
        },
    },
    RegionShape {
        id: "hip-flexors-left",
        regions: &[Region::HipFlexors],
        shape: Shape::Path {
            d: "M 122 318 L 118 340 L 128 348 L 138 336 L 135 318 Z",
        },
    },
    RegionShape {
        id: "hip-flexors-right",
        regions: &[Region::HipFlexors],
        shape: Shape::Path {
            d: "M 178 318 L 182 340 L 172 348 L 162 336 L 165 318 Z",
        },
    },
    RegionShape {
        id: "quads-left",
        regions: &[Region::Quads],
        shape: Shape::Path {
            d: "M 120 350 L 115 380 L 125 440 L 135 460 L 138 420 L 130 360 Z",
        },
    },
    RegionShape {
        id: "quads-right",
        regions: &[Region::Quads],
        shape: Shape::Path {
            d: "M 180 350 L 185 380 L 175 440 L 165 460 L 162 420 L 170 360 Z",
        },
    },
    RegionShape {
        id: "hip-adductors-left",
        regions: &[Region::HipAdductors],
        shape: Shape::Path {
            d: "M 138 360 L 145 400 L 148 440 L 143 420 L 140 360 Z",
        },
    },
    RegionShape {
        id: "hip-adductors-right",
        regions: &[Region::HipAdductors],
        shape: Shape::Path {
            d: "M 162 360 L 155 400 L 152 440 L 157 420 L 160 360 Z",
        },
    },
];

const BACK: &[RegionShape] = &[
    RegionShape {
        id: "traps-upper",
        regions: &[Region::TrapsUpper],
        shape: Shape::Path {
            d: "M 130 95 Q 140 100 150 100 Q 160 100 170 95 L 165 115 L 150 120 L 135 115 Z",
        },
    },
    RegionShape {
        id: "traps-middle-rhomboids",
        regions: &[Region::TrapsMiddle, Region::Rhomboids],
        shape: Shape::Path {
            d: "M 115 125 L 105 145 L 110 165 L 150 155 L 190 165 L 195 145 L 185 125 L 150 135 Z",
        },
    },
    RegionShape {
        id: "rotator-cuff-left",
        regions: &[Region::RotatorCuff],
        shape: Shape::Ellipse {
            cx: 122.,
            cy: 142.,
            rx: 9.,
            ry: 7.,
        },
    },
    RegionShape {
        id: "rotator-cuff-right",
        regions: &[Region::RotatorCuff],
        shape: Shape::Ellipse {
            cx: 178.,
            cy: 142.,
            rx: 9.,
            ry: 7.,
        },
    },
    RegionShape {
        id: "lats-left",
        regions: &[Region::Lats],
        shape: Shape::Path {
            d: "M 105 170 Q 95 200 92 240 L 108 270 L 125 240 L 118 190 Z",
        },
    },
    RegionShape {
        id: "lats-right",
        regions: &[Region::Lats],
        shape: Shape::Path {
            d: "M 195 170 Q 205 200 208 240 L 192 270 L 175 240 L 182 190 Z",
        },
    },
    RegionShape {
        id: "lower-back",
        regions: &[Region::LowerBack],
        shape: Shape::Rect {
            x: 130.,
            y: 260.,
            width: 40.,
            height: 60.,
            rx: 5.,
        },
    },
    RegionShape {
        id: "deltoids-rear-left",
        regions: REAR_DELTS,
        shape: Shape::Ellipse {
            cx: 100.,
            cy: 125.,
            rx: 18.,
            ry: 25.,
        },
    },
    RegionShape {
        id: "deltoids-rear-right",
        regions: REAR_DELTS,
        shape: Shape::Ellipse {
            cx: 200.,
            cy: 125.,
            rx: 18.,
            ry: 25.,
        },
    },
    RegionShape {
        id: "triceps-left",
        regions: &[Region::Triceps],
        shape: Shape::Path {
            d: "M 75 145 Q 68 170 65 195 L 70 210 L 78 195 L 82 165 Z",
        },
    },
    RegionShape {
        id: "triceps-right",
        regions: &[Region::Triceps],
        shape: Shape::Path {
            d: "M 225 145 Q 232 170 235 195 L 230 210 L 222 195 L 218 165 Z",
        },
    },
    RegionShape {
        id: "glutes-left",
        regions: &[Region::Glutes],
        shape: Shape::Ellipse {
            cx: 125.,
            cy: 340.,
            rx: 18.,
            ry: 28.,
        },
    },
    RegionShape {
        id: "glutes-right",
        regions: &[Region::Glutes],
        shape: Shape::Ellipse {
            cx: 175.,
            cy: 340.,
            rx: 18.,
            ry: 28.,
        },
    },
    RegionShape {
        id: "hip-abductors-left",
        regions: &[Region::HipAbductors],
        shape: Shape::Path {
            d: "M 110 355 L 105 390 L 110 425 L 118 415 L 120 375 Z",
        },
    },
    RegionShape {
        id: "hip-abductors-right",
        regions: &[Region::HipAbductors],
        shape: Shape::Path {
            d: "M 190 355 L 195 390 L 190 425 L 182 415 L 180 375 Z",
        },
    },
    RegionShape {
        id: "hamstrings-left",
        regions: &[Region::Hamstrings],
        shape: Shape::Path {
            d: "M 122 380 L 118 415 L 125 460 L 132 470 L 135 435 L 130 385 Z",
        },
    },
    RegionShape {
        id: "hamstrings-right",
        regions: &[Region::Hamstrings],
        shape: Shape::Path {
            d: "M 178 380 L 182 415 L 175 460 L 168 470 L 165 435 L 170 385 Z",
        },
    },
    RegionShape {
        id: "calves-left",
        regions: &[Region::Calves],
        shape: Shape::Ellipse {
            cx: 130.,
            cy: 520.,
            rx: 12.,
            ry: 35.,
        },
    },
    RegionShape {
        id: "calves-right",
        regions: &[Region::Calves],
        shape: Shape::Ellipse {
            cx: 170.,
            cy: 520.,
            rx: 12.,
            ry: 35.,
        },
    },
];
