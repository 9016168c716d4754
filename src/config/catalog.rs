use once_cell::sync::Lazy;

use crate::models::insight::{ BusinessObjective, Product, Segment };

/// Analysis categories offered by the explorer. The string id is the stable
/// key used on the wire and in the client store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PromptKind {
    MarketingOkrs,
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
    MarketPositioning,
    BuyerPersona,
    InvestmentOpportunities,
    ChannelsDistribution,
}

impl PromptKind {
    pub const ALL: [PromptKind; 9] = [
        PromptKind::MarketingOkrs,
        PromptKind::Strengths,
        PromptKind::Weaknesses,
        PromptKind::Opportunities,
        PromptKind::Threats,
        PromptKind::MarketPositioning,
        PromptKind::BuyerPersona,
        PromptKind::InvestmentOpportunities,
        PromptKind::ChannelsDistribution,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PromptKind::MarketingOkrs => "marketing-okrs",
            PromptKind::Strengths => "strengths",
            PromptKind::Weaknesses => "weaknesses",
            PromptKind::Opportunities => "opportunities",
            PromptKind::Threats => "threats",
            PromptKind::MarketPositioning => "market-positioning",
            PromptKind::BuyerPersona => "buyer-persona",
            PromptKind::InvestmentOpportunities => "investment-opportunities",
            PromptKind::ChannelsDistribution => "channels-distribution",
        }
    }

    pub fn from_id(id: &str) -> Option<PromptKind> {
        PromptKind::ALL.iter().copied().find(|kind| kind.id() == id)
    }

    /// Render the natural-language question for one (segment, product,
    /// objective) combination. Objectives read as verb phrases ("Increase
    /// Awareness"), so they are lowercased mid-sentence.
    pub fn render(self, segment: &str, product: &str, objective: &str) -> String {
        let objective = objective.to_lowercase();
        match self {
            PromptKind::MarketingOkrs =>
                format!(
                    "What are 3 measurable marketing OKRs to {} for {} in the {} segment?",
                    objective,
                    product,
                    segment
                ),
            PromptKind::Strengths =>
                format!(
                    "What {} strengths matter most to {} when trying to {}?",
                    product,
                    segment,
                    objective
                ),
            PromptKind::Weaknesses =>
                format!(
                    "What would {} be concerned about or dislike when considering {} to {}?",
                    segment,
                    product,
                    objective
                ),
            PromptKind::Opportunities =>
                format!(
                    "What {} opportunities can we unlock by targeting {} to {}?",
                    product,
                    segment,
                    objective
                ),
            PromptKind::Threats =>
                format!(
                    "What risks might prevent {} from adopting or staying loyal to {} when trying to {}?",
                    segment,
                    product,
                    objective
                ),
            PromptKind::MarketPositioning =>
                format!(
                    "How should we position {} to resonate with {} to {}?",
                    product,
                    segment,
                    objective
                ),
            PromptKind::BuyerPersona =>
                format!(
                    "Write a sample persona for a typical {} customer interested in {} to {}.",
                    segment,
                    product,
                    objective
                ),
            PromptKind::InvestmentOpportunities =>
                format!(
                    "Why is {} strategically valuable from a growth/investment perspective for {} when trying to {}?",
                    segment,
                    product,
                    objective
                ),
            PromptKind::ChannelsDistribution =>
                format!(
                    "How should we reach and activate {} for {} to {}?",
                    segment,
                    product,
                    objective
                ),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PromptType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub kind: PromptKind,
}

static PROMPT_TYPES: [PromptType; 9] = [
    PromptType {
        id: "marketing-okrs",
        name: "Marketing OKRs",
        description: "Measurable marketing objectives and key results",
        icon: "Target",
        kind: PromptKind::MarketingOkrs,
    },
    PromptType {
        id: "strengths",
        name: "Strengths",
        description: "Product strengths that matter to this segment",
        icon: "TrendingUp",
        kind: PromptKind::Strengths,
    },
    PromptType {
        id: "weaknesses",
        name: "Weaknesses",
        description: "Concerns and potential dislikes",
        icon: "TrendingDown",
        kind: PromptKind::Weaknesses,
    },
    PromptType {
        id: "opportunities",
        name: "Opportunities",
        description: "Product and brand opportunities to unlock",
        icon: "Lightbulb",
        kind: PromptKind::Opportunities,
    },
    PromptType {
        id: "threats",
        name: "Threats",
        description: "Risks preventing adoption or loyalty",
        icon: "AlertTriangle",
        kind: PromptKind::Threats,
    },
    PromptType {
        id: "market-positioning",
        name: "Market Positioning",
        description: "How to position the product effectively",
        icon: "Crosshair",
        kind: PromptKind::MarketPositioning,
    },
    PromptType {
        id: "buyer-persona",
        name: "Buyer Persona",
        description: "Detailed customer persona profile",
        icon: "User",
        kind: PromptKind::BuyerPersona,
    },
    PromptType {
        id: "investment-opportunities",
        name: "Investment Opportunities",
        description: "Strategic value from growth perspective",
        icon: "DollarSign",
        kind: PromptKind::InvestmentOpportunities,
    },
    PromptType {
        id: "channels-distribution",
        name: "Channels & Distribution",
        description: "How to reach and activate the segment",
        icon: "Share2",
        kind: PromptKind::ChannelsDistribution,
    },
];

pub fn prompt_types() -> &'static [PromptType] {
    &PROMPT_TYPES
}

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product {
            id: "electric-cars".to_string(),
            name: "Electric Cars".to_string(),
            description: "Sustainable electric vehicle solutions".to_string(),
        },
        Product {
            id: "coffee".to_string(),
            name: "Coffee".to_string(),
            description: "Premium coffee products and services".to_string(),
        },
        Product {
            id: "fitness-app".to_string(),
            name: "Fitness App".to_string(),
            description: "Digital fitness and wellness platform".to_string(),
        },
        Product {
            id: "saas-platform".to_string(),
            name: "SaaS Platform".to_string(),
            description: "Business automation software solution".to_string(),
        }
    ]
});

static BUSINESS_OBJECTIVES: Lazy<Vec<BusinessObjective>> = Lazy::new(|| {
    vec![
        BusinessObjective {
            id: "increase-awareness".to_string(),
            name: "Increase Awareness".to_string(),
            description: "Build brand recognition and visibility".to_string(),
        },
        BusinessObjective {
            id: "increase-consideration".to_string(),
            name: "Increase Consideration".to_string(),
            description: "Drive evaluation and interest".to_string(),
        },
        BusinessObjective {
            id: "increase-sales".to_string(),
            name: "Increase Sales".to_string(),
            description: "Convert prospects to customers".to_string(),
        },
        BusinessObjective {
            id: "improve-retention".to_string(),
            name: "Improve Retention".to_string(),
            description: "Enhance customer loyalty and lifetime value".to_string(),
        }
    ]
});

static SEGMENTS: Lazy<Vec<Segment>> = Lazy::new(|| {
    vec![
        Segment {
            id: "gen-z-creators".to_string(),
            name: "Gen Z Creators".to_string(),
            description: "Young content creators and influencers (18-26)".to_string(),
        },
        Segment {
            id: "urban-climate-advocates".to_string(),
            name: "Urban Climate Advocates".to_string(),
            description: "Environmentally conscious urban professionals".to_string(),
        },
        Segment {
            id: "cost-sensitive-smb".to_string(),
            name: "Cost-Sensitive SMB Owners".to_string(),
            description: "Small business owners focused on value and ROI".to_string(),
        },
        Segment {
            id: "retired-diyers".to_string(),
            name: "Retired DIYers".to_string(),
            description: "Active retirees who enjoy hands-on projects".to_string(),
        },
        Segment {
            id: "enterprise-it-leaders".to_string(),
            name: "Enterprise IT Leaders".to_string(),
            description: "Technology decision-makers in large organizations".to_string(),
        }
    ]
});

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn business_objectives() -> &'static [BusinessObjective] {
    &BUSINESS_OBJECTIVES
}

pub fn segments() -> &'static [Segment] {
    &SEGMENTS
}
