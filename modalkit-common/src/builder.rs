//! Edit operations used by the builder
//!
//! Each operation is a small merge-style patch applied to a `ModalConfig`.
//! Edits that point at a step, field or list entry that doesn't exist are
//! dropped with a warning rather than failing.

use crate::config::*;
use tracing::warn;

/// Partial update of a step's own settings
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepPatch {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub inherit_previous_panel: Option<bool>,
    /// `Some(None)` clears the override
    pub panel_background_color: Option<Option<String>>,
}

/// Partial update of a form field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldPatch {
    pub id: Option<String>,
    pub label: Option<String>,
    pub field_type: Option<FieldType>,
    pub required: Option<bool>,
    pub full_width: Option<bool>,
    pub options: Option<Vec<String>>,
}

/// Partial update of the global style. Empty strings clear a value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StylePatch {
    pub font_family: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub text_color: Option<String>,
    pub left_panel_color: Option<String>,
    pub right_panel_main_color: Option<String>,
    pub left_panel_padding: Option<String>,
}

/// Partial update of the header branding
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrandingPatch {
    pub company_name: Option<String>,
    /// `Some(None)` removes the logo
    pub logo: Option<Option<String>>,
}

/// A single edit to a step's panel content.
///
/// Edits that don't apply to the current variant are ignored.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEdit {
    Headline(String),
    /// Success panel subheadline
    Subheadline(String),

    AddValueProp,
    RemoveValueProp(usize),
    ValuePropIcon(usize, String),
    ValuePropText(usize, String),
    AddLogo,
    RemoveLogo(String),
    LogoUrl(String, String),
    LogoAlt(String, String),
    LogoDisplayMode(LogoDisplayMode),

    AddStat,
    RemoveStat(usize),
    StatValue(usize, String),
    StatLabel(usize, String),
    StatIcon(usize, Option<String>),

    Quote(String),
    AuthorName(String),
    AuthorTitle(String),
    AuthorAvatar(Option<String>),

    AddFeature,
    RemoveFeature(usize),
    FeatureTitle(usize, String),
    FeatureDescription(usize, String),
    FeatureIcon(usize, String),

    AddSuccessFeature,
    RemoveSuccessFeature(usize),
    SuccessFeatureTitle(usize, String),
    SuccessFeatureIcon(usize, String),
}

/// Options textarea contents: one option per line, blank lines dropped
pub fn parse_options(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn options_text(options: &[String]) -> String {
    options.join("\n")
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) -> bool {
    if index < items.len() {
        items.remove(index);
        true
    } else {
        false
    }
}

fn edit_at<T>(items: &mut [T], index: usize, f: impl FnOnce(&mut T)) -> bool {
    match items.get_mut(index) {
        Some(item) => {
            f(item);
            true
        }
        None => false,
    }
}

impl PanelContent {
    /// Apply an edit. Returns false when it doesn't fit this variant or
    /// points past the end of a list.
    pub fn apply(&mut self, edit: PanelEdit) -> bool {
        use PanelEdit as E;

        if let E::Headline(headline) = edit {
            self.set_headline(headline);
            return true;
        }

        match (self, edit) {
            (PanelContent::Main(p), E::AddValueProp) => {
                p.value_props.push(ValueProp {
                    icon: "Star".to_string(),
                    text: String::new(),
                });
                true
            }
            (PanelContent::Main(p), E::RemoveValueProp(i)) => remove_at(&mut p.value_props, i),
            (PanelContent::Main(p), E::ValuePropIcon(i, icon)) => {
                edit_at(&mut p.value_props, i, |v| v.icon = icon)
            }
            (PanelContent::Main(p), E::ValuePropText(i, text)) => {
                edit_at(&mut p.value_props, i, |v| v.text = text)
            }
            (PanelContent::Main(p), E::AddLogo) => {
                p.trusted_by_logos.push(TrustedLogo::new("", ""));
                true
            }
            (PanelContent::Main(p), E::RemoveLogo(id)) => {
                let before = p.trusted_by_logos.len();
                p.trusted_by_logos.retain(|logo| logo.id != id);
                p.trusted_by_logos.len() != before
            }
            (PanelContent::Main(p), E::LogoUrl(id, url)) => {
                match p.trusted_by_logos.iter_mut().find(|l| l.id == id) {
                    Some(logo) => {
                        logo.url = url;
                        true
                    }
                    None => false,
                }
            }
            (PanelContent::Main(p), E::LogoAlt(id, alt)) => {
                match p.trusted_by_logos.iter_mut().find(|l| l.id == id) {
                    Some(logo) => {
                        logo.alt = alt;
                        true
                    }
                    None => false,
                }
            }
            (PanelContent::Main(p), E::LogoDisplayMode(mode)) => {
                p.logo_display_mode = mode;
                true
            }

            (PanelContent::ValueProps(p), E::AddStat) => {
                p.stats.push(Stat {
                    value: String::new(),
                    label: String::new(),
                    icon: Some("ChevronRight".to_string()),
                });
                true
            }
            (PanelContent::ValueProps(p), E::RemoveStat(i)) => remove_at(&mut p.stats, i),
            (PanelContent::ValueProps(p), E::StatValue(i, value)) => {
                edit_at(&mut p.stats, i, |s| s.value = value)
            }
            (PanelContent::ValueProps(p), E::StatLabel(i, label)) => {
                edit_at(&mut p.stats, i, |s| s.label = label)
            }
            (PanelContent::ValueProps(p), E::StatIcon(i, icon)) => {
                edit_at(&mut p.stats, i, |s| s.icon = icon.and_then(non_empty))
            }

            (PanelContent::Testimonial(p), E::Quote(quote)) => {
                p.quote = quote;
                true
            }
            (PanelContent::Testimonial(p), E::AuthorName(name)) => {
                p.author.name = name;
                true
            }
            (PanelContent::Testimonial(p), E::AuthorTitle(title)) => {
                p.author.title = title;
                true
            }
            (PanelContent::Testimonial(p), E::AuthorAvatar(avatar)) => {
                p.author.avatar = avatar.and_then(non_empty);
                true
            }

            (PanelContent::Features(p), E::AddFeature) => {
                p.features.push(Feature {
                    title: String::new(),
                    description: String::new(),
                    icon: "Star".to_string(),
                });
                true
            }
            (PanelContent::Features(p), E::RemoveFeature(i)) => remove_at(&mut p.features, i),
            (PanelContent::Features(p), E::FeatureTitle(i, title)) => {
                edit_at(&mut p.features, i, |f| f.title = title)
            }
            (PanelContent::Features(p), E::FeatureDescription(i, description)) => {
                edit_at(&mut p.features, i, |f| f.description = description)
            }
            (PanelContent::Features(p), E::FeatureIcon(i, icon)) => {
                edit_at(&mut p.features, i, |f| f.icon = icon)
            }

            (PanelContent::Success(p), E::Subheadline(subheadline)) => {
                p.subheadline = subheadline;
                true
            }
            (PanelContent::Success(p), E::AddSuccessFeature) => {
                p.features.push(SuccessFeature {
                    title: String::new(),
                    icon: "Check".to_string(),
                });
                true
            }
            (PanelContent::Success(p), E::RemoveSuccessFeature(i)) => {
                remove_at(&mut p.features, i)
            }
            (PanelContent::Success(p), E::SuccessFeatureTitle(i, title)) => {
                edit_at(&mut p.features, i, |f| f.title = title)
            }
            (PanelContent::Success(p), E::SuccessFeatureIcon(i, icon)) => {
                edit_at(&mut p.features, i, |f| f.icon = icon)
            }

            _ => false,
        }
    }
}

impl StepConfig {
    pub fn apply(&mut self, patch: StepPatch) {
        if let Some(headline) = patch.headline {
            self.headline = headline;
        }
        if let Some(subheadline) = patch.subheadline {
            self.subheadline = subheadline;
        }
        if let Some(inherit) = patch.inherit_previous_panel {
            self.inherit_previous_panel = inherit;
        }
        if let Some(color) = patch.panel_background_color {
            self.panel_background_color = color.and_then(non_empty);
        }
    }
}

impl FormField {
    pub fn apply(&mut self, patch: FieldPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(field_type) = patch.field_type {
            self.field_type = field_type;
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if let Some(full_width) = patch.full_width {
            self.full_width = full_width;
        }
        if let Some(options) = patch.options {
            self.options = Some(options);
        }
    }
}

impl ModalStyle {
    pub fn apply(&mut self, patch: StylePatch) {
        let slots = [
            (patch.font_family, &mut self.font_family),
            (patch.primary_color, &mut self.primary_color),
            (patch.secondary_color, &mut self.secondary_color),
            (patch.text_color, &mut self.text_color),
            (patch.left_panel_color, &mut self.left_panel_color),
            (patch.right_panel_main_color, &mut self.right_panel_main_color),
            (patch.left_panel_padding, &mut self.left_panel_padding),
        ];
        for (update, slot) in slots {
            if let Some(value) = update {
                *slot = non_empty(value);
            }
        }
    }
}

impl ModalConfig {
    /// Append a blank step and return its index
    pub fn add_step(&mut self) -> usize {
        self.steps.push(StepConfig::new_blank());
        self.steps.len() - 1
    }

    /// Remove a step. The last remaining step can't be removed.
    pub fn remove_step(&mut self, index: usize) -> bool {
        if self.steps.len() <= 1 || index >= self.steps.len() {
            return false;
        }
        self.steps.remove(index);
        true
    }

    fn step_mut(&mut self, index: usize) -> Option<&mut StepConfig> {
        let step = self.steps.get_mut(index);
        if step.is_none() {
            warn!("Ignoring edit for missing step {index}");
        }
        step
    }

    pub fn update_step(&mut self, index: usize, patch: StepPatch) {
        if let Some(step) = self.step_mut(index) {
            step.apply(patch);
        }
    }

    pub fn set_inherit_previous_panel(&mut self, index: usize, inherit: bool) {
        self.update_step(
            index,
            StepPatch {
                inherit_previous_panel: Some(inherit),
                ..Default::default()
            },
        );
    }

    /// Switch a step's panel type, replacing its content with the new
    /// type's empty skeleton. Picking the current type keeps the content.
    pub fn set_panel_type(&mut self, index: usize, panel_type: PanelType) {
        if let Some(step) = self.step_mut(index) {
            if step.panel.panel_type() != panel_type {
                step.panel = PanelContent::skeleton(panel_type);
            }
        }
    }

    pub fn edit_panel(&mut self, index: usize, edit: PanelEdit) {
        if let Some(step) = self.step_mut(index) {
            let panel_type = step.panel.panel_type();
            if !step.panel.apply(edit.clone()) {
                warn!("Edit {edit:?} does not apply to {} panel", panel_type.as_str());
            }
        }
    }

    /// Append a blank field to a step and return its id
    pub fn add_field(&mut self, step_index: usize) -> Option<String> {
        let step = self.step_mut(step_index)?;
        let field = FormField::new_blank();
        let id = field.id.clone();
        step.fields.push(field);
        Some(id)
    }

    pub fn remove_field(&mut self, step_index: usize, field_index: usize) -> bool {
        match self.step_mut(step_index) {
            Some(step) => remove_at(&mut step.fields, field_index),
            None => false,
        }
    }

    pub fn update_field(&mut self, step_index: usize, field_index: usize, patch: FieldPatch) {
        if let Some(step) = self.step_mut(step_index) {
            if !edit_at(&mut step.fields, field_index, |f| f.apply(patch)) {
                warn!("Ignoring edit for missing field {field_index} in step {step_index}");
            }
        }
    }

    pub fn update_style(&mut self, patch: StylePatch) {
        self.style.apply(patch);
    }

    pub fn update_branding(&mut self, patch: BrandingPatch) {
        if let Some(name) = patch.company_name {
            self.branding.company_name = name;
        }
        if let Some(logo) = patch.logo {
            self.branding.logo = logo.and_then(non_empty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_panel_type_resets_content() {
        let mut config = ModalConfig::starter();
        assert_eq!(config.steps[0].panel_type(), PanelType::Main);

        config.set_panel_type(0, PanelType::Testimonial);
        assert_eq!(
            config.steps[0].panel,
            PanelContent::Testimonial(TestimonialPanel::default())
        );

        // Switching back does not bring the old main content back
        config.set_panel_type(0, PanelType::Main);
        assert_eq!(config.steps[0].panel, PanelContent::Main(MainPanel::default()));
    }

    #[test]
    fn picking_same_panel_type_keeps_content() {
        let mut config = ModalConfig::starter();
        let before = config.steps[1].panel.clone();
        config.set_panel_type(1, PanelType::ValueProps);
        assert_eq!(config.steps[1].panel, before);
    }

    #[test]
    fn last_step_cannot_be_removed() {
        let mut config = ModalConfig {
            steps: vec![StepConfig::new_blank()],
            ..Default::default()
        };
        assert!(!config.remove_step(0));
        assert_eq!(config.add_step(), 1);
        assert!(config.remove_step(0));
        assert_eq!(config.steps.len(), 1);
        assert!(!config.remove_step(5));
    }

    #[test]
    fn add_and_edit_fields() {
        let mut config = ModalConfig::starter();
        let before = config.steps[0].fields.len();
        let id = config.add_field(0).unwrap();
        let added = config.steps[0].fields.last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.field_type, FieldType::Text);
        assert!(added.full_width);
        assert!(!added.required);

        config.update_field(
            0,
            before,
            FieldPatch {
                label: Some("Company".into()),
                field_type: Some(FieldType::Select),
                options: Some(parse_options("Small\n\n  Large  \n")),
                required: Some(true),
                ..Default::default()
            },
        );
        let edited = &config.steps[0].fields[before];
        assert_eq!(edited.label, "Company");
        assert_eq!(edited.options(), ["Small".to_string(), "Large".to_string()]);
        assert!(edited.required);

        assert!(config.remove_field(0, before));
        assert_eq!(config.steps[0].fields.len(), before);
        assert!(!config.remove_field(0, 99));
        assert_eq!(config.add_field(42), None);
    }

    #[test]
    fn panel_edits_only_apply_to_matching_variant() {
        let mut panel = PanelContent::skeleton(PanelType::Main);
        assert!(panel.apply(PanelEdit::AddValueProp));
        assert!(panel.apply(PanelEdit::ValuePropText(0, "Fast".into())));
        assert!(!panel.apply(PanelEdit::ValuePropText(3, "nope".into())));
        assert!(!panel.apply(PanelEdit::Quote("wrong variant".into())));
        assert!(panel.apply(PanelEdit::Headline("Hello".into())));
        assert!(panel.apply(PanelEdit::LogoDisplayMode(LogoDisplayMode::Static)));

        let PanelContent::Main(main) = &panel else {
            panic!("expected main panel");
        };
        assert_eq!(main.headline, "Hello");
        assert_eq!(main.value_props[0].icon, "Star");
        assert_eq!(main.value_props[0].text, "Fast");
        assert_eq!(main.logo_display_mode, LogoDisplayMode::Static);
    }

    #[test]
    fn logo_entries_are_edited_by_id() {
        let mut panel = PanelContent::skeleton(PanelType::Main);
        panel.apply(PanelEdit::AddLogo);
        panel.apply(PanelEdit::AddLogo);
        let PanelContent::Main(main) = &panel else {
            panic!("expected main panel");
        };
        let first = main.trusted_by_logos[0].id.clone();

        assert!(panel.apply(PanelEdit::LogoUrl(first.clone(), "https://a.test/l.svg".into())));
        assert!(panel.apply(PanelEdit::RemoveLogo(first.clone())));
        assert!(!panel.apply(PanelEdit::RemoveLogo(first)));

        let PanelContent::Main(main) = &panel else {
            panic!("expected main panel");
        };
        assert_eq!(main.trusted_by_logos.len(), 1);
        assert_eq!(main.trusted_by_logos[0].url, "");
    }

    #[test]
    fn testimonial_and_success_edits() {
        let mut panel = PanelContent::skeleton(PanelType::Testimonial);
        panel.apply(PanelEdit::AuthorName("Jane".into()));
        panel.apply(PanelEdit::AuthorAvatar(Some("   ".into())));
        let PanelContent::Testimonial(t) = &panel else {
            panic!("expected testimonial");
        };
        assert_eq!(t.author.name, "Jane");
        assert_eq!(t.author.avatar, None);

        let mut panel = PanelContent::skeleton(PanelType::Success);
        assert!(panel.apply(PanelEdit::Subheadline("Unlocked".into())));
        assert!(panel.apply(PanelEdit::AddSuccessFeature));
        assert!(panel.apply(PanelEdit::SuccessFeatureTitle(0, "API access".into())));
        assert!(panel.apply(PanelEdit::RemoveSuccessFeature(0)));
        assert!(!panel.apply(PanelEdit::RemoveSuccessFeature(0)));
    }

    #[test]
    fn step_patch_merges() {
        let mut config = ModalConfig::starter();
        config.update_step(
            1,
            StepPatch {
                headline: Some("Models".into()),
                panel_background_color: Some(Some("#123456".into())),
                ..Default::default()
            },
        );
        config.set_inherit_previous_panel(1, true);
        let step = &config.steps[1];
        assert_eq!(step.headline, "Models");
        assert_eq!(step.subheadline, "We'll help you optimize your workflow");
        assert!(step.inherit_previous_panel);
        assert_eq!(step.panel_background_color.as_deref(), Some("#123456"));

        config.update_step(
            1,
            StepPatch {
                panel_background_color: Some(None),
                ..Default::default()
            },
        );
        assert_eq!(config.steps[1].panel_background_color, None);
    }

    #[test]
    fn style_and_branding_patches() {
        let mut config = ModalConfig::starter();
        config.update_style(StylePatch {
            font_family: Some("inter".into()),
            left_panel_color: Some("linear-gradient(#000, #fff)".into()),
            right_panel_main_color: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(config.style.font_family.as_deref(), Some("inter"));
        assert_eq!(
            config.style.left_panel_color.as_deref(),
            Some("linear-gradient(#000, #fff)")
        );
        assert_eq!(config.style.right_panel_main_color, None);

        config.update_branding(BrandingPatch {
            company_name: Some("Acme".into()),
            logo: Some(Some("data:image/png;base64,AAAA".into())),
        });
        assert_eq!(config.branding.company_name, "Acme");
        assert!(config.branding.logo.is_some());
    }

    #[test]
    fn options_text_round_trip() {
        let options = vec!["A".to_string(), "B".to_string()];
        assert_eq!(parse_options(&options_text(&options)), options);
    }
}
