//! Signup modal configuration model
//!
//! Wire names are camelCase so configs published by older builders keep
//! loading. Missing strings and lists default to empty, and a step with no
//! `panelContent` gets the empty content of its `panelType`.

use serde::{Deserialize, Serialize};

/// Root configuration for one signup modal
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalConfig {
    /// Legacy top-level headline, superseded by per-step panel content
    #[serde(default)]
    pub headline: String,
    /// Legacy top-level value props
    #[serde(default)]
    pub value_props: Vec<ValueProp>,
    /// Legacy top-level logo reference
    #[serde(default)]
    pub logo: String,
    /// Legacy top-level logo strip
    #[serde(default)]
    pub trusted_by_logos: Vec<TrustedLogo>,
    #[serde(default)]
    pub branding: Branding,
    #[serde(default)]
    pub style: ModalStyle,
    /// Wizard steps in navigation order
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// Header branding shown above the form on every step
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    #[serde(default)]
    pub company_name: String,
    /// Image reference (URL or data URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Name shown in the form header when no company name is configured
pub const DEFAULT_COMPANY_NAME: &str = "OpenPipe";

impl Branding {
    /// Company name, falling back to the default when blank
    pub fn display_name(&self) -> &str {
        if self.company_name.trim().is_empty() {
            DEFAULT_COMPANY_NAME
        } else {
            &self.company_name
        }
    }
}

/// Global visual defaults
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// CSS color or gradient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_panel_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_panel_main_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_panel_padding: Option<String>,
}

/// One page of the wizard: a left panel plus a form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepConfig {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub subheadline: String,
    /// Serialized as the `panelType` / `panelContent` pair
    #[serde(flatten)]
    pub panel: PanelContent,
    #[serde(default)]
    pub fields: Vec<FormField>,
    /// Reuse the previous step's panel; ignored on the first step
    #[serde(default)]
    pub inherit_previous_panel: bool,
    /// Overrides `style.leftPanelColor` for this step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_background_color: Option<String>,
}

impl StepConfig {
    /// Blank step appended by the builder
    pub fn new_blank() -> Self {
        Self {
            headline: "New Step".to_string(),
            subheadline: String::new(),
            panel: PanelContent::skeleton(PanelType::Main),
            fields: Vec::new(),
            inherit_previous_panel: false,
            panel_background_color: None,
        }
    }

    pub fn panel_type(&self) -> PanelType {
        self.panel.panel_type()
    }
}

/// Discriminant of [`PanelContent`], used by pickers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelType {
    Main,
    ValueProps,
    Testimonial,
    Features,
    Success,
}

impl PanelType {
    pub const ALL: [PanelType; 5] = [
        PanelType::Main,
        PanelType::ValueProps,
        PanelType::Testimonial,
        PanelType::Features,
        PanelType::Success,
    ];

    /// Wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelType::Main => "main",
            PanelType::ValueProps => "value-props",
            PanelType::Testimonial => "testimonial",
            PanelType::Features => "features",
            PanelType::Success => "success",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PanelType::Main => "Main",
            PanelType::ValueProps => "Value Props",
            PanelType::Testimonial => "Testimonial",
            PanelType::Features => "Features",
            PanelType::Success => "Success",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

/// Left panel content, tagged by panel type.
///
/// A step without `panelContent` loads as the empty skeleton of its type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "panelType",
    content = "panelContent",
    rename_all = "kebab-case",
    try_from = "PanelContentRepr"
)]
pub enum PanelContent {
    Main(MainPanel),
    ValueProps(ValuePropsPanel),
    Testimonial(TestimonialPanel),
    Features(FeaturesPanel),
    Success(SuccessPanel),
}

/// Wire shape of [`PanelContent`] before the content is checked against
/// its tag
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PanelContentRepr {
    panel_type: String,
    #[serde(default)]
    panel_content: Option<serde_json::Value>,
}

fn panel_from_value<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| e.to_string())
}

impl TryFrom<PanelContentRepr> for PanelContent {
    type Error = String;

    fn try_from(repr: PanelContentRepr) -> Result<Self, Self::Error> {
        let panel_type = PanelType::from_tag(&repr.panel_type)
            .ok_or_else(|| format!("unknown panel type '{}'", repr.panel_type))?;
        let Some(content) = repr.panel_content.filter(|c| !c.is_null()) else {
            return Ok(PanelContent::skeleton(panel_type));
        };

        Ok(match panel_type {
            PanelType::Main => PanelContent::Main(panel_from_value(content)?),
            PanelType::ValueProps => PanelContent::ValueProps(panel_from_value(content)?),
            PanelType::Testimonial => PanelContent::Testimonial(panel_from_value(content)?),
            PanelType::Features => PanelContent::Features(panel_from_value(content)?),
            PanelType::Success => PanelContent::Success(panel_from_value(content)?),
        })
    }
}

impl PanelContent {
    pub fn panel_type(&self) -> PanelType {
        match self {
            PanelContent::Main(_) => PanelType::Main,
            PanelContent::ValueProps(_) => PanelType::ValueProps,
            PanelContent::Testimonial(_) => PanelType::Testimonial,
            PanelContent::Features(_) => PanelType::Features,
            PanelContent::Success(_) => PanelType::Success,
        }
    }

    /// Empty content for a panel type
    pub fn skeleton(panel_type: PanelType) -> Self {
        match panel_type {
            PanelType::Main => PanelContent::Main(MainPanel::default()),
            PanelType::ValueProps => PanelContent::ValueProps(ValuePropsPanel::default()),
            PanelType::Testimonial => PanelContent::Testimonial(TestimonialPanel::default()),
            PanelType::Features => PanelContent::Features(FeaturesPanel::default()),
            PanelType::Success => PanelContent::Success(SuccessPanel::default()),
        }
    }

    /// Every variant carries a headline
    pub fn headline(&self) -> &str {
        match self {
            PanelContent::Main(p) => &p.headline,
            PanelContent::ValueProps(p) => &p.headline,
            PanelContent::Testimonial(p) => &p.headline,
            PanelContent::Features(p) => &p.headline,
            PanelContent::Success(p) => &p.headline,
        }
    }

    pub fn set_headline(&mut self, headline: String) {
        match self {
            PanelContent::Main(p) => p.headline = headline,
            PanelContent::ValueProps(p) => p.headline = headline,
            PanelContent::Testimonial(p) => p.headline = headline,
            PanelContent::Features(p) => p.headline = headline,
            PanelContent::Success(p) => p.headline = headline,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainPanel {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub value_props: Vec<ValueProp>,
    #[serde(default)]
    pub trusted_by_logos: Vec<TrustedLogo>,
    #[serde(default)]
    pub logo_display_mode: LogoDisplayMode,
}

/// How the trusted-by strip is laid out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoDisplayMode {
    /// Infinite horizontal scroll
    #[default]
    Ticker,
    /// Plain wrapped row
    Static,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueProp {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuePropsPanel {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialPanel {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub author: Author,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    /// Image reference; a placeholder disc is drawn when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturesPanel {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuccessPanel {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub subheadline: String,
    #[serde(default)]
    pub features: Vec<SuccessFeature>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuccessFeature {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub icon: String,
}

/// Partner logo in the trusted-by strip
///
/// Early configs stored bare URL strings; those load with a fresh id and
/// empty alt text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "TrustedLogoRepr")]
pub struct TrustedLogo {
    pub id: String,
    /// URL or data URL
    pub url: String,
    pub alt: String,
}

impl TrustedLogo {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            url: url.into(),
            alt: alt.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TrustedLogoRepr {
    Url(String),
    Logo {
        #[serde(default)]
        id: String,
        #[serde(default)]
        url: String,
        #[serde(default)]
        alt: String,
    },
}

impl From<TrustedLogoRepr> for TrustedLogo {
    fn from(repr: TrustedLogoRepr) -> Self {
        match repr {
            TrustedLogoRepr::Url(url) => TrustedLogo::new(url, ""),
            TrustedLogoRepr::Logo { id, url, alt } if id.is_empty() => TrustedLogo::new(url, alt),
            TrustedLogoRepr::Logo { id, url, alt } => TrustedLogo { id, url, alt },
        }
    }
}

/// One input on the right-hand form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Unique within the step; form-data key and DOM id
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub full_width: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl FormField {
    /// Field appended by the builder: text, optional, full width
    pub fn new_blank() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            label: String::new(),
            field_type: FieldType::Text,
            required: false,
            full_width: true,
            options: None,
        }
    }

    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Email,
    Select,
    MultiSelect,
    Textarea,
}

impl FieldType {
    pub const ALL: [FieldType; 5] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Select,
        FieldType::MultiSelect,
        FieldType::Textarea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Select => "select",
            FieldType::MultiSelect => "multi-select",
            FieldType::Textarea => "textarea",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Email => "Email",
            FieldType::Select => "Select",
            FieldType::MultiSelect => "Multi Select",
            FieldType::Textarea => "Textarea",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// Whether the field picks from `options`
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::MultiSelect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wire_format_uses_panel_type_tag() {
        let json = r##"{
            "headline": "Tell us about your models",
            "subheadline": "",
            "panelType": "value-props",
            "panelContent": {
                "headline": "Why use us?",
                "stats": [{ "value": "14x", "label": "Cheaper" }]
            },
            "fields": [],
            "panelBackgroundColor": "#111"
        }"##;

        let step: StepConfig = serde_json::from_str(json).unwrap();
        assert_eq!(step.panel_type(), PanelType::ValueProps);
        assert!(!step.inherit_previous_panel);
        assert_eq!(step.panel_background_color.as_deref(), Some("#111"));
        match &step.panel {
            PanelContent::ValueProps(p) => {
                assert_eq!(p.stats.len(), 1);
                assert_eq!(p.stats[0].icon, None);
            }
            other => panic!("unexpected panel {other:?}"),
        }

        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["panelType"], "value-props");
        assert_eq!(value["panelContent"]["headline"], "Why use us?");
    }

    #[test]
    fn mismatched_panel_content_is_rejected() {
        let json = r#"{
            "headline": "x",
            "panelType": "testimonial",
            "panelContent": { "headline": "h", "quote": 5 }
        }"#;
        assert!(serde_json::from_str::<StepConfig>(json).is_err());
    }

    #[test]
    fn missing_panel_content_loads_skeleton() {
        let step: StepConfig = serde_json::from_str(r#"{ "panelType": "success" }"#).unwrap();
        assert_eq!(step.panel, PanelContent::Success(SuccessPanel::default()));

        let step: StepConfig =
            serde_json::from_str(r#"{ "panelType": "features", "panelContent": null }"#).unwrap();
        assert_eq!(step.panel, PanelContent::skeleton(PanelType::Features));

        let config: ModalConfig = serde_json::from_str(
            r#"{ "steps": [{ "headline": "Hi", "panelType": "testimonial" }] }"#,
        )
        .unwrap();
        assert_eq!(config.steps[0].headline, "Hi");
        assert_eq!(config.steps[0].panel_type(), PanelType::Testimonial);
    }

    #[test]
    fn unknown_panel_type_is_rejected() {
        let json = r#"{ "panelType": "carousel", "panelContent": {} }"#;
        assert!(serde_json::from_str::<StepConfig>(json).is_err());
    }

    #[test]
    fn main_panel_defaults_to_ticker() {
        let json = r#"{ "panelType": "main", "panelContent": { "headline": "Hi" } }"#;
        let step: StepConfig = serde_json::from_str(json).unwrap();
        match step.panel {
            PanelContent::Main(p) => {
                assert_eq!(p.logo_display_mode, LogoDisplayMode::Ticker);
                assert!(p.value_props.is_empty());
            }
            other => panic!("unexpected panel {other:?}"),
        }
    }

    #[test]
    fn bare_logo_urls_are_accepted() {
        let json = r#"{
            "panelType": "main",
            "panelContent": {
                "trustedByLogos": [
                    "https://example.com/a.svg",
                    { "id": "b", "url": "https://example.com/b.svg", "alt": "B" }
                ]
            }
        }"#;
        let step: StepConfig = serde_json::from_str(json).unwrap();
        let PanelContent::Main(p) = step.panel else {
            panic!("expected main panel");
        };
        assert_eq!(p.trusted_by_logos.len(), 2);
        assert_eq!(p.trusted_by_logos[0].url, "https://example.com/a.svg");
        assert!(!p.trusted_by_logos[0].id.is_empty());
        assert_eq!(p.trusted_by_logos[1].id, "b");
        assert_eq!(p.trusted_by_logos[1].alt, "B");
    }

    #[test]
    fn field_type_wire_names() {
        let field: FormField = serde_json::from_str(
            r#"{ "id": "models", "label": "Models", "type": "multi-select", "options": ["A"] }"#,
        )
        .unwrap();
        assert_eq!(field.field_type, FieldType::MultiSelect);
        assert!(!field.required);
        assert!(!field.full_width);
        assert_eq!(field.options(), ["A".to_string()]);
        assert_eq!(FieldType::from_tag("textarea"), Some(FieldType::Textarea));
        assert_eq!(FieldType::from_tag("checkbox"), None);
    }

    #[test]
    fn branding_falls_back_to_default_name() {
        let branding = Branding::default();
        assert_eq!(branding.display_name(), DEFAULT_COMPANY_NAME);
        let branding = Branding {
            company_name: "Acme".to_string(),
            logo: None,
        };
        assert_eq!(branding.display_name(), "Acme");
    }

    #[test]
    fn panel_type_tags_round_trip() {
        for t in PanelType::ALL {
            assert_eq!(PanelType::from_tag(t.as_str()), Some(t));
            assert_eq!(PanelContent::skeleton(t).panel_type(), t);
        }
    }
}
