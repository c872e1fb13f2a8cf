use yew::prelude::*;

/// Stroke icons drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Activity,
    Building,
    CheckCircle,
    ChevronDown,
    ChevronRight,
    Database,
    FileCheck,
    Mail,
    Map,
    Share,
    Shield,
    Target,
    TrendingUp,
    Users,
    Zap,
}

enum Shape {
    Path(&'static str),
    Circle(f32, f32, f32),
    Ellipse(f32, f32, f32, f32),
    Rect(f32, f32, f32, f32, f32),
}

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        use Shape::*;
        match self {
            Icon::Activity => &[Path("M22 12h-4l-3 9L9 3l-3 9H2")],
            Icon::Building => &[
                Path("M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z"),
                Path("M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2"),
                Path("M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2"),
                Path("M10 6h4M10 10h4M10 14h4M10 18h4"),
            ],
            Icon::CheckCircle => &[Circle(12.0, 12.0, 10.0), Path("m9 12 2 2 4-4")],
            Icon::ChevronDown => &[Path("m6 9 6 6 6-6")],
            Icon::ChevronRight => &[Path("m9 18 6-6-6-6")],
            Icon::Database => &[
                Ellipse(12.0, 5.0, 9.0, 3.0),
                Path("M3 5v14a9 3 0 0 0 18 0V5"),
                Path("M3 12a9 3 0 0 0 18 0"),
            ],
            Icon::FileCheck => &[
                Path("M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"),
                Path("M14 2v4a2 2 0 0 0 2 2h4"),
                Path("m9 15 2 2 4-4"),
            ],
            Icon::Mail => &[
                Rect(2.0, 4.0, 20.0, 16.0, 2.0),
                Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Icon::Map => &[
                Path("M14.1 5.55a2 2 0 0 0 1.8 0l3.65-1.83A1 1 0 0 1 21 4.62v12.76a1 1 0 0 1-.55.9l-4.55 2.27a2 2 0 0 1-1.8 0l-4.2-2.1a2 2 0 0 0-1.8 0l-3.65 1.83A1 1 0 0 1 3 19.38V6.62a1 1 0 0 1 .55-.9l4.55-2.27a2 2 0 0 1 1.8 0z"),
                Path("M15 5.76v15M9 3.24v15"),
            ],
            Icon::Share => &[
                Circle(18.0, 5.0, 3.0),
                Circle(6.0, 12.0, 3.0),
                Circle(18.0, 19.0, 3.0),
                Path("m8.59 13.51 6.83 3.98M15.41 6.51l-6.82 3.98"),
            ],
            Icon::Shield => &[Path(
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            )],
            Icon::Target => &[Circle(12.0, 12.0, 10.0), Circle(12.0, 12.0, 6.0), Circle(12.0, 12.0, 2.0)],
            Icon::TrendingUp => &[Path("m22 7-8.5 8.5-5-5L2 17"), Path("M16 7h6v6")],
            Icon::Users => &[
                Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
                Circle(9.0, 7.0, 4.0),
                Path("M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            Icon::Zap => &[Path(
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            )],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconProps) -> Html {
    let size = props.size.to_string();
    let shapes = props.icon.shapes().iter().map(|shape| match *shape {
        Shape::Path(d) => html! { <path d={d} /> },
        Shape::Circle(cx, cy, r) => html! {
            <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
        },
        Shape::Ellipse(cx, cy, rx, ry) => html! {
            <ellipse cx={cx.to_string()} cy={cy.to_string()} rx={rx.to_string()} ry={ry.to_string()} />
        },
        Shape::Rect(x, y, width, height, rx) => html! {
            <rect x={x.to_string()} y={y.to_string()} width={width.to_string()} height={height.to_string()} rx={rx.to_string()} />
        },
    });

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for shapes }
        </svg>
    }
}
