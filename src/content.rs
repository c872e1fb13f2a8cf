//! Everything the page says. Plain `'static` records, no runtime state.

use crate::components::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Clinic,
    Insurer,
}

impl Segment {
    pub fn tone(self) -> Tone {
        match self {
            Segment::Clinic => Tone::Emerald,
            Segment::Insurer => Tone::Blue,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Segment::Clinic => Icon::Building,
            Segment::Insurer => Icon::Shield,
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Segment::Clinic => "High ROI",
            Segment::Insurer => "Scale",
        }
    }
}

/// Accent color family. `soft` is the pale tile background, `strong` the
/// saturated variant used when a row is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Emerald,
    Amber,
    Indigo,
    Rose,
    Cyan,
}

impl Tone {
    pub fn name(self) -> &'static str {
        match self {
            Tone::Blue => "blue",
            Tone::Emerald => "emerald",
            Tone::Amber => "amber",
            Tone::Indigo => "indigo",
            Tone::Rose => "rose",
            Tone::Cyan => "cyan",
        }
    }

    pub fn soft(self) -> &'static str {
        match self {
            Tone::Blue => "#dbeafe",
            Tone::Emerald => "#d1fae5",
            Tone::Amber => "#fef3c7",
            Tone::Indigo => "#e0e7ff",
            Tone::Rose => "#ffe4e6",
            Tone::Cyan => "#cffafe",
        }
    }

    pub fn ink(self) -> &'static str {
        match self {
            Tone::Blue => "#1d4ed8",
            Tone::Emerald => "#047857",
            Tone::Amber => "#b45309",
            Tone::Indigo => "#4338ca",
            Tone::Rose => "#be123c",
            Tone::Cyan => "#0e7490",
        }
    }

    pub fn strong(self) -> &'static str {
        match self {
            Tone::Blue => "#3b82f6",
            Tone::Emerald => "#10b981",
            Tone::Amber => "#f59e0b",
            Tone::Indigo => "#6366f1",
            Tone::Rose => "#f43f5e",
            Tone::Cyan => "#06b6d4",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyProfile {
    pub segment: Segment,
    pub title: &'static str,
    pub description: &'static str,
    pub target_profile: &'static [&'static str],
    pub value_props: &'static [&'static str],
    pub pricing: &'static str,
    pub offer_title: &'static str,
    pub deliverables: &'static [&'static str],
    pub metrics: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthTactic {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub icon: Icon,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapPhase {
    pub period: &'static str,
    pub title: &'static str,
    pub milestones: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Funnel {
    pub segment: Segment,
    pub title: &'static str,
    pub steps: &'static [&'static str],
}

impl Funnel {
    /// The step the north star metric is read from.
    pub const HIGHLIGHTED_STEP: usize = 2;
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Count(u64),
    Text(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeMetric {
    pub label: &'static str,
    pub value: MetricValue,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitCriterion {
    pub label: &'static str,
    pub points: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CadenceStage {
    pub weeks: &'static str,
    pub headline: &'static str,
    pub focus: &'static str,
    pub active: bool,
}

pub const HERO_TAGS: [&str; 3] = ["< 2 MIN READ", "ICP ANALYSIS", "10X GROWTH"];

pub static CLINIC_STRATEGY: StrategyProfile = StrategyProfile {
    segment: Segment::Clinic,
    title: "ICP A: Longevity Clinics",
    description: "Private healthcare with long-term relationships.",
    target_profile: &[
        "Membership / concierge / annual program models",
        "High-trust patient base",
        "Needs 'between-visit' engagement",
    ],
    value_props: &[
        "Digital clinic extension",
        "Higher retention of premium memberships",
        "More bookings for add-on services",
    ],
    pricing: "Few-hundred € / member / year (Sold as premium add-on)",
    offer_title: "30-day Branded Preventive Front Door",
    deliverables: &[
        "Branded onboarding flow",
        "Clinic-specific CTAs (consults/labs)",
        "Partner dashboard",
    ],
    metrics: &[
        "Activation %",
        "Second scan in 7 days %",
        "4-week retention",
        "Bookings influenced",
    ],
};

pub static INSURER_STRATEGY: StrategyProfile = StrategyProfile {
    segment: Segment::Insurer,
    title: "ICP B: Insurers (Germany)",
    description: "Innovation & selective access paths (§68a SGB V).",
    target_profile: &[
        "Innovation teams / selective contracts",
        "Goal: Early engagement → fewer late diagnoses",
        "Monetize engagement quickly",
    ],
    value_props: &[
        "Measurable prevention adherence",
        "Engagement without hardware logistics",
        "Pilotable with evaluation design",
    ],
    pricing: "Low single-digit € / member / month (Volume based)",
    offer_title: "90-day §68a Pilot-in-a-box",
    deliverables: &[
        "Cohort definition (age/risk)",
        "Outcomes framework",
        "Privacy/security pack & evaluation plan",
    ],
    metrics: &[
        "Enrollment rate",
        "Weekly active screenings",
        "Routing to next step (Telemed/GP)",
    ],
};

pub static GROWTH_TACTICS: [GrowthTactic; 6] = [
    GrowthTactic {
        id: 1,
        title: "§68a Approval Pack",
        subtitle: "Insurer Deal Unlocker",
        description: "Ready-made kit: 1-page spec, DPIA, evaluation design. Solves bureaucracy upfront.",
        impact: "Reduces time-to-pilot by 50%",
        icon: Icon::FileCheck,
        tone: Tone::Blue,
    },
    GrowthTactic {
        id: 2,
        title: "Revenue Loop Dashboard",
        subtitle: "For Clinics",
        description: "Don't just show engagement. Show: X screened → Y flagged → Z bookings generated.",
        impact: "Turns 'nice-to-have' into revenue",
        icon: Icon::TrendingUp,
        tone: Tone::Emerald,
    },
    GrowthTactic {
        id: 3,
        title: "BioAge League",
        subtitle: "Gamification",
        description: "21-day challenge. Weekly check-in + energy comparisons. Winner gets clinic perks.",
        impact: "Community + Upsell Engine",
        icon: Icon::Zap,
        tone: Tone::Amber,
    },
    GrowthTactic {
        id: 4,
        title: "Maps Signal Scraping",
        subtitle: "Targeting Edge",
        description: "Scrape G-Maps for keywords: 'concierge', 'biohacking'. Enrich with price/practitioner count.",
        impact: "Proprietary TAM Map",
        icon: Icon::Map,
        tone: Tone::Indigo,
    },
    GrowthTactic {
        id: 5,
        title: "Partner Launch Kit",
        subtitle: "Distribution Multiplier",
        description: "5 emails, 3 SMS, social posts, webinar deck provided to every partner.",
        impact: "Partner does 70% of distribution",
        icon: Icon::Share,
        tone: Tone::Rose,
    },
    GrowthTactic {
        id: 6,
        title: "Consumer Pull-Through",
        subtitle: "Lead Gen",
        description: "Ask users: 'Which clinic should sponsor you?' Aggregate demand → Warm Outbound.",
        impact: "Cold BD becomes Warm BD",
        icon: Icon::Users,
        tone: Tone::Cyan,
    },
];

pub static ROADMAP: [RoadmapPhase; 3] = [
    RoadmapPhase {
        period: "30 Days",
        title: "Foundation & First Pilots",
        milestones: &[
            "ICP lists built + scoring live",
            "3 outbound sequences running",
            "Partner dashboard MVP live",
            "2 pilots signed (1 Clinic, 1 Insurer)",
        ],
    },
    RoadmapPhase {
        period: "60 Days",
        title: "Repeatable Process",
        milestones: &[
            "Repeatable 30-day launch process",
            "First case study (Engagement + Outcomes)",
            "Approval Accelerator used in 2 talks",
        ],
    },
    RoadmapPhase {
        period: "90 Days",
        title: "Scale & Playbook",
        milestones: &[
            "4–6 active partners in pipeline",
            "Full Playbook documented",
            "Founder-led sales becomes scalable",
        ],
    },
];

pub static FUNNELS: [Funnel; 2] = [
    Funnel {
        segment: Segment::Clinic,
        title: "Clinic Funnel",
        steps: &["Invited", "Activated", "W1 Retained", "Bookings"],
    },
    Funnel {
        segment: Segment::Insurer,
        title: "Insurer Funnel",
        steps: &["Eligible", "Enrolled", "WA_Scan", "Action Rate"],
    },
];

/// Account engine targets, shown as count-ups.
pub const TARGET_CLINICS: u64 = 300;
pub const PAYER_ORGS: u64 = 60;

pub static WEEKLY_VOLUME: [VolumeMetric; 4] = [
    VolumeMetric { label: "New Contacts", value: MetricValue::Count(250), highlight: false },
    VolumeMetric { label: "Positive Replies", value: MetricValue::Count(15), highlight: false },
    VolumeMetric { label: "Qualified Mtgs", value: MetricValue::Count(10), highlight: false },
    VolumeMetric { label: "Pilots / Mo", value: MetricValue::Text("2-4"), highlight: true },
];

pub static FIT_CRITERIA: [FitCriterion; 3] = [
    FitCriterion { label: "Recurring Revenue", points: "+20" },
    FitCriterion { label: "1k+ Members", points: "+15" },
    FitCriterion { label: "Sells Diagnostics", points: "+15" },
];

pub static CADENCE: [CadenceStage; 2] = [
    CadenceStage {
        weeks: "Weeks 1–4",
        headline: "4–8 micro-tests / week",
        focus: "Persona x Angle x Offer",
        active: false,
    },
    CadenceStage {
        weeks: "Weeks 5–8",
        headline: "Scale Winners",
        focus: "Focus on highest WA_Scan cohorts",
        active: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tactics_are_ordered_by_id() {
        let ids: Vec<u32> = GROWTH_TACTICS.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn tactics_use_distinct_tones() {
        let mut tones: Vec<&str> = GROWTH_TACTICS.iter().map(|t| t.tone.name()).collect();
        tones.sort_unstable();
        tones.dedup();
        assert_eq!(tones.len(), GROWTH_TACTICS.len());
    }

    #[test]
    fn roadmap_covers_ninety_days() {
        let periods: Vec<&str> = ROADMAP.iter().map(|p| p.period).collect();
        assert_eq!(periods, vec!["30 Days", "60 Days", "90 Days"]);
        assert!(ROADMAP.iter().all(|p| !p.milestones.is_empty()));
    }

    #[test]
    fn strategies_match_their_segment() {
        assert_eq!(CLINIC_STRATEGY.segment, Segment::Clinic);
        assert_eq!(INSURER_STRATEGY.segment, Segment::Insurer);
        assert_eq!(Segment::Clinic.tone(), Tone::Emerald);
        assert_eq!(Segment::Insurer.badge(), "Scale");
    }

    #[test]
    fn funnels_have_a_highlighted_step() {
        for funnel in FUNNELS.iter() {
            assert!(funnel.steps.len() > Funnel::HIGHLIGHTED_STEP);
        }
        assert_eq!(FUNNELS[1].steps[Funnel::HIGHLIGHTED_STEP], "WA_Scan");
    }

    #[test]
    fn only_pilots_are_highlighted() {
        let highlighted: Vec<&str> = WEEKLY_VOLUME.iter().filter(|m| m.highlight).map(|m| m.label).collect();
        assert_eq!(highlighted, vec!["Pilots / Mo"]);
    }
}
