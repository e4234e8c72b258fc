//! The questionnaire catalog: every section's fields, in display order.

use once_cell::sync::Lazy;

use super::{AnswerSet, Field, FieldOption, Section};

macro_rules! options {
    ($($value:literal => $label:literal),+ $(,)?) => {
        &[$(FieldOption { value: $value, label: $label }),+]
    };
}

const COMPANY_SIZES: &[FieldOption] = options![
    "1-10" => "1-10 employees",
    "11-50" => "11-50 employees",
    "51-200" => "51-200 employees",
    "201-500" => "201-500 employees",
    "501-1000" => "501-1000 employees",
    "1000+" => "1000+ employees",
];

const INDUSTRIES: &[FieldOption] = options![
    "technology" => "Technology",
    "finance" => "Finance & Banking",
    "healthcare" => "Healthcare",
    "education" => "Education",
    "retail" => "Retail",
    "manufacturing" => "Manufacturing",
    "professional_services" => "Professional Services",
    "real_estate" => "Real Estate",
    "other" => "Other",
];

const OUTREACH_VOLUMES: &[FieldOption] = options![
    "less_than_100" => "Less than 100 per month",
    "100_500" => "100-500 per month",
    "501_1000" => "501-1,000 per month",
    "1001_5000" => "1,001-5,000 per month",
    "5001_10000" => "5,001-10,000 per month",
    "more_than_10000" => "More than 10,000 per month",
];

const SUCCESS_METRICS: &[FieldOption] = options![
    "meetings_booked" => "Meetings Booked",
    "response_rate" => "Response Rate",
    "conversion_rate" => "Conversion Rate",
    "pipeline_generated" => "Pipeline Generated",
    "revenue_influenced" => "Revenue Influenced",
    "cost_per_meeting" => "Cost Per Meeting",
    "time_to_qualification" => "Time to Qualification",
    "other" => "Other",
];

const PAIN_POINTS: &[FieldOption] = options![
    "low_response_rates" => "Low Response Rates",
    "poor_lead_quality" => "Poor Lead Quality",
    "high_sdr_turnover" => "High SDR Turnover",
    "inconsistent_messaging" => "Inconsistent Messaging",
    "scaling_challenges" => "Scaling Challenges",
    "inefficient_processes" => "Inefficient Processes",
    "lack_of_personalization" => "Lack of Personalization",
    "data_quality_issues" => "Data Quality Issues",
    "other" => "Other",
];

const CRM_PLATFORMS: &[FieldOption] = options![
    "salesforce" => "Salesforce",
    "hubspot" => "HubSpot",
    "zoho" => "Zoho CRM",
    "pipedrive" => "Pipedrive",
    "microsoft_dynamics" => "Microsoft Dynamics",
    "sugarcrm" => "SugarCRM",
    "freshsales" => "Freshsales",
    "other" => "Other",
];

const SALES_TECH: &[FieldOption] = options![
    "outreach" => "Outreach.io",
    "salesloft" => "SalesLoft",
    "apollo" => "Apollo.io",
    "zoominfo" => "ZoomInfo",
    "lusha" => "Lusha",
    "clearbit" => "Clearbit",
    "gong" => "Gong.io",
    "linkedin_sales_navigator" => "LinkedIn Sales Navigator",
    "seamless_ai" => "Seamless.AI",
    "other" => "Other",
];

const DATA_SOURCES: &[FieldOption] = options![
    "crm_data" => "CRM Data",
    "marketing_automation" => "Marketing Automation Platform",
    "website_analytics" => "Website Analytics",
    "third_party_data" => "Third-Party Data Providers",
    "social_media" => "Social Media Data",
    "customer_surveys" => "Customer Surveys/Feedback",
    "internal_databases" => "Internal Databases",
    "other" => "Other",
];

const SECURITY_PROTOCOLS: &[FieldOption] = options![
    "gdpr" => "GDPR Compliance",
    "ccpa" => "CCPA Compliance",
    "hipaa" => "HIPAA Compliance",
    "soc2" => "SOC 2 Compliance",
    "iso27001" => "ISO 27001",
    "encryption" => "Data Encryption Requirements",
    "access_controls" => "Strict Access Controls",
    "audit_logging" => "Audit Logging",
    "other" => "Other",
];

const CONVERSATIONAL_CAPABILITIES: &[FieldOption] = options![
    "chatbot" => "Chatbot",
    "voice_agent" => "Voice agent only",
];

const CONVERSATIONAL_COMPLEXITY: &[FieldOption] = options![
    "basic" => "Basic scripted responses",
    "dynamic" => "Dynamic responses (adapts to prospect questions)",
    "advanced" => "Advanced NLP for natural dialogue",
];

const TONE_PREFERENCES: &[FieldOption] = options![
    "male" => "Male voice",
    "female" => "Female voice",
    "professional" => "Professional/formal",
    "friendly" => "Friendly/conversational",
    "other" => "Other",
];

const FALLBACK_OPTIONS: &[FieldOption] = options![
    "human_transfer" => "Transfer to human agent",
    "callback" => "Schedule callback",
    "other" => "Other",
];

const YES_NO: &[FieldOption] = options![
    "yes" => "Yes",
    "no" => "No",
];

const POST_CALL_ACTIONS: &[FieldOption] = options![
    "follow_up_email" => "Send follow-up email",
    "update_crm" => "Update CRM",
    "notify_sales" => "Notify sales team",
];

const MESSAGING_CHANNELS: &[FieldOption] = options![
    "email" => "Email Outreach",
    "linkedin" => "LinkedIn Messages",
    "phone" => "Phone Calls",
    "sms" => "SMS/Text Messages",
    "multi_channel" => "Multi-Channel Sequences",
    "other" => "Other",
];

const PERSONALIZATION_LEVELS: &[FieldOption] = options![
    "minimal" => "Minimal (Name, Company only)",
    "moderate" => "Moderate (Industry insights, role-specific content)",
    "high" => "High (Deep research, personalized pain points)",
    "dynamic" => "Dynamic (AI-driven personalization based on behavior)",
];

const SUCCESS_CRITERIA: &[FieldOption] = options![
    "response_rate" => "Increased Response Rate",
    "meeting_volume" => "Higher Meeting Volume",
    "conversion_rate" => "Improved Conversion Rate",
    "cost_efficiency" => "Lower Cost Per Meeting",
    "time_savings" => "Time Savings for Sales Team",
    "pipeline_growth" => "Pipeline Growth",
    "revenue_impact" => "Revenue Impact",
    "other" => "Other",
];

const TIMELINES: &[FieldOption] = options![
    "immediate" => "Immediate (0-30 days)",
    "short_term" => "Short-term (1-3 months)",
    "medium_term" => "Medium-term (3-6 months)",
    "long_term" => "Long-term (6+ months)",
];

const BUDGETS: &[FieldOption] = options![
    "under_5k" => "Under $5,000 per month",
    "5k_10k" => "$5,000 - $10,000 per month",
    "10k_25k" => "$10,000 - $25,000 per month",
    "25k_50k" => "$25,000 - $50,000 per month",
    "over_50k" => "Over $50,000 per month",
    "not_determined" => "Not yet determined",
];

static STANDARD: Lazy<Catalog> = Lazy::new(|| Catalog::new(standard_fields()));

fn standard_fields() -> Vec<Field> {
    use Section::*;

    vec![
        // Organization Profile
        Field::text("companyName", "Company Name", OrganizationProfile)
            .enforced("Company name is required"),
        Field::select("industry", "Industry", OrganizationProfile, INDUSTRIES).advisory(),
        Field::select("companySize", "Company Size", OrganizationProfile, COMPANY_SIZES)
            .advisory(),
        Field::text("contactName", "Primary Contact Name", OrganizationProfile).advisory(),
        Field::text("contactEmail", "Contact Email", OrganizationProfile)
            .email()
            .enforced("Contact email is required"),
        Field::text("contactPhone", "Contact Phone", OrganizationProfile).phone(),
        Field::text("decisionMakerName", "Decision Maker Name", OrganizationProfile),
        Field::text("decisionMakerRole", "Decision Maker Role", OrganizationProfile),
        Field::text_area(
            "salesTeamStructure",
            "Describe your current sales team structure",
            OrganizationProfile,
        )
        .placeholder("E.g., Number of SDRs, AEs, reporting structure, etc."),
        // Sales Operations
        Field::text_area(
            "sdrProcessWorkflow",
            "Describe your current SDR process workflow",
            SalesOperations,
        )
        .placeholder("E.g., Prospecting methods, outreach channels, follow-up cadence, etc."),
        Field::select(
            "monthlyOutreachVolume",
            "Monthly Outreach Volume",
            SalesOperations,
            OUTREACH_VOLUMES,
        )
        .enforced("Monthly outreach volume is required"),
        Field::checkboxes(
            "successMetrics",
            "Select the key metrics you track",
            SalesOperations,
            SUCCESS_METRICS,
        )
        .junction_column("success_metric"),
        Field::checkboxes(
            "painPoints",
            "Select your top pain points",
            SalesOperations,
            PAIN_POINTS,
        )
        .junction_column("pain_point"),
        Field::text_area(
            "painPointsDetails",
            "Additional details about your challenges",
            SalesOperations,
        )
        .placeholder("Please provide more context about your specific challenges..."),
        // Technical Environment
        Field::select("crmPlatform", "CRM Platform", TechnicalEnvironment, CRM_PLATFORMS)
            .enforced("CRM platform information is required"),
        Field::text(
            "crmPlatformOther",
            "Please specify your CRM platform",
            TechnicalEnvironment,
        )
        .visible_when_equals("crmPlatform", "other"),
        Field::checkboxes(
            "salesTechStack",
            "Sales Technology Stack",
            TechnicalEnvironment,
            SALES_TECH,
        ),
        Field::checkboxes("dataSources", "Data Sources", TechnicalEnvironment, DATA_SOURCES)
            .junction_column("data_source"),
        Field::text_area(
            "dataSourcesDetails",
            "Additional information about your data sources",
            TechnicalEnvironment,
        )
        .placeholder(
            "Please provide more details about how you collect and manage prospect data...",
        ),
        Field::checkboxes(
            "securityProtocols",
            "Security Protocols and Compliance Needs",
            TechnicalEnvironment,
            SECURITY_PROTOCOLS,
        )
        .junction_column("security_protocol"),
        Field::text_area(
            "securityDetails",
            "Additional security requirements",
            TechnicalEnvironment,
        )
        .placeholder("Please specify any additional security requirements or concerns..."),
        // AI SDR Requirements
        Field::text_area("targetAudience", "Target Audience Definition", AiSdrRequirements)
            .placeholder(
                "Describe your ideal customer profile, including industry, company size, job titles, etc.",
            ),
        Field::checkboxes(
            "conversationalCapabilities",
            "Capabilities",
            AiSdrRequirements,
            CONVERSATIONAL_CAPABILITIES,
        )
        .junction_column("conversational_capability"),
        Field::radio(
            "conversationalComplexity",
            "Desired level of conversational complexity",
            AiSdrRequirements,
            CONVERSATIONAL_COMPLEXITY,
        ),
        Field::text_area("keyObjections", "Key objections to handle", AiSdrRequirements)
            .placeholder("List the common objections that the AI should be prepared to address..."),
        Field::checkboxes(
            "tonePreferences",
            "Tone and style preferences",
            AiSdrRequirements,
            TONE_PREFERENCES,
        )
        .junction_column("tone_preference"),
        Field::text(
            "tonePreferencesOther",
            "Please specify other tone preferences",
            AiSdrRequirements,
        )
        .visible_when_contains("tonePreferences", "other"),
        Field::radio(
            "fallbackOption",
            "Fallback option if AI cannot answer",
            AiSdrRequirements,
            FALLBACK_OPTIONS,
        ),
        Field::text(
            "fallbackOptionOther",
            "Please specify other fallback option",
            AiSdrRequirements,
        )
        .visible_when_equals("fallbackOption", "other"),
        Field::radio(
            "hasExistingScripts",
            "Attach existing call scripts/pitch decks",
            AiSdrRequirements,
            YES_NO,
        ),
        Field::text_area("callFlowIntroduction", "Introduction", AiSdrRequirements)
            .placeholder("Describe how the call should be introduced..."),
        Field::text_area(
            "callFlowQualification",
            "Qualification questions",
            AiSdrRequirements,
        )
        .placeholder("List key qualification questions to ask..."),
        Field::text_area(
            "callFlowPitch",
            "Product/Service pitch highlights",
            AiSdrRequirements,
        )
        .placeholder("Outline the main points to highlight in the pitch..."),
        Field::text_area("callFlowObjections", "Handling objections", AiSdrRequirements)
            .placeholder("Describe how objections should be handled..."),
        Field::text_area(
            "callFlowClosing",
            "Closing (e.g., schedule meeting)",
            AiSdrRequirements,
        )
        .placeholder("Describe the desired closing approach..."),
        Field::checkboxes(
            "postCallActions",
            "Post-call actions",
            AiSdrRequirements,
            POST_CALL_ACTIONS,
        )
        .junction_column("post_call_action"),
        Field::checkboxes(
            "messagingPreferences",
            "Preferred Outreach Channels",
            AiSdrRequirements,
            MESSAGING_CHANNELS,
        )
        .junction_column("messaging_preference"),
        Field::radio(
            "personalizationLevel",
            "Desired Personalization Level",
            AiSdrRequirements,
            PERSONALIZATION_LEVELS,
        ),
        Field::checkboxes(
            "successCriteria",
            "Success Criteria",
            AiSdrRequirements,
            SUCCESS_CRITERIA,
        ),
        Field::radio(
            "implementationTimeline",
            "Implementation Timeline",
            AiSdrRequirements,
            TIMELINES,
        )
        .enforced("Implementation timeline is required"),
        Field::radio("budgetRange", "Budget Range", AiSdrRequirements, BUDGETS)
            .enforced("Budget range is required"),
        Field::text_area(
            "additionalRequirements",
            "Any additional requirements or comments",
            AiSdrRequirements,
        )
        .placeholder(
            "Please share any other requirements or information that would be helpful...",
        ),
    ]
}

/// Read-only table of every field, grouped by section.
///
/// Defined once at startup; validation, draft restore and submission mapping
/// all read field knowledge from here rather than keeping their own lists.
#[derive(Debug, Clone)]
pub struct Catalog {
    fields: Vec<Field>,
}

impl Catalog {
    /// Builds a catalog. Fields keep their relative order within a section.
    pub fn new(fields: Vec<Field>) -> Self {
        let mut fields = fields;
        fields.sort_by_key(|f| f.section.order_index());
        Self { fields }
    }

    /// The lead intake questionnaire.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Sections in wizard order.
    pub fn sections(&self) -> &'static [Section] {
        Section::all()
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Fields of one section in display order.
    pub fn fields_of(&self, section: Section) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(move |f| f.section == section)
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn multi_choice_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_multi_choice())
    }

    /// Fields of a section whose display condition holds for the answers.
    pub fn visible_fields<'a>(
        &'a self,
        section: Section,
        answers: &'a AnswerSet,
    ) -> impl Iterator<Item = &'a Field> {
        self.fields_of(section).filter(move |f| f.is_visible(answers))
    }
}
