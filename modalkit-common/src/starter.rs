//! Starter config the builder opens with

use crate::config::*;

/// Transparent 1x1 PNG used for placeholder partner logos
pub const TRANSPARENT_PIXEL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

pub fn placeholder_logos() -> Vec<TrustedLogo> {
    (1..=3)
        .map(|i| TrustedLogo {
            id: format!("placeholder-{i}"),
            url: TRANSPARENT_PIXEL.to_string(),
            alt: format!("Trusted Company {i}"),
        })
        .collect()
}

fn value_prop(icon: &str, text: &str) -> ValueProp {
    ValueProp {
        icon: icon.to_string(),
        text: text.to_string(),
    }
}

fn field(id: &str, field_type: FieldType, label: &str, full_width: bool) -> FormField {
    FormField {
        id: id.to_string(),
        label: label.to_string(),
        field_type,
        required: true,
        full_width,
        options: None,
    }
}

fn options(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

impl ModalConfig {
    /// A five-step demo covering every panel type
    pub fn starter() -> Self {
        let value_props = vec![
            value_prop("Layers", "Train & deploy fine-tuned models"),
            value_prop("DollarSign", "Save time and money"),
            value_prop("Sparkles", "Get higher quality than OpenAI"),
        ];

        let welcome = StepConfig {
            headline: "Get started with OpenPipe".to_string(),
            subheadline: "Create your account to start fine-tuning models".to_string(),
            panel: PanelContent::Main(MainPanel {
                headline: "Train faster, cheaper models".to_string(),
                value_props: vec![
                    value_prop("Layers", "Fine-tune models in minutes"),
                    value_prop("DollarSign", "Cut costs by 10-100x"),
                    value_prop("Rocket", "Deploy anywhere"),
                    value_prop("LineChart", "Evaluate & monitor performance"),
                ],
                trusted_by_logos: placeholder_logos(),
                logo_display_mode: LogoDisplayMode::Ticker,
            }),
            fields: vec![
                field("email", FieldType::Email, "Work Email", true),
                field("firstName", FieldType::Text, "First Name", false),
                field("lastName", FieldType::Text, "Last Name", false),
            ],
            inherit_previous_panel: false,
            panel_background_color: None,
        };

        let models = StepConfig {
            headline: "Tell us about your models".to_string(),
            subheadline: "We'll help you optimize your workflow".to_string(),
            panel: PanelContent::ValueProps(ValuePropsPanel {
                headline: "Why use OpenPipe?".to_string(),
                stats: vec![
                    Stat {
                        value: "14x".to_string(),
                        label: "Cheaper than GPT-4 Turbo".to_string(),
                        icon: Some("ChevronDown".to_string()),
                    },
                    Stat {
                        value: "5min".to_string(),
                        label: "To start collecting training data".to_string(),
                        icon: Some("ChevronRight".to_string()),
                    },
                    Stat {
                        value: "$7M".to_string(),
                        label: "Saved by our customers this year".to_string(),
                        icon: Some("ChevronUp".to_string()),
                    },
                ],
            }),
            fields: vec![FormField {
                options: options(&["GPT-4", "GPT-3.5", "Claude", "Llama 2", "Other"]),
                ..field("currentModels", FieldType::Select, "Current Models", true)
            }],
            inherit_previous_panel: false,
            panel_background_color: None,
        };

        let volume = StepConfig {
            headline: "About how many LLM calls does your project make per day?".to_string(),
            subheadline: String::new(),
            panel: PanelContent::Testimonial(TestimonialPanel {
                headline: "What our users say".to_string(),
                quote: "OpenPipe increased our inference speed by 3x compared to GPT4-turbo while reducing cost by >10x. It's a no-brainer for any company that uses LLMs in prod.".to_string(),
                author: Author {
                    name: "David Paffenholz".to_string(),
                    title: "CEO & Co-founder • Juicebox".to_string(),
                    avatar: None,
                },
            }),
            fields: vec![
                FormField {
                    options: options(&[
                        "< 1,000",
                        "1,000 to 10,000",
                        "10,000 to 50,000",
                        "50,000 to 100,000",
                        "> 100,000",
                    ]),
                    ..field("dailyCalls", FieldType::Select, "Daily calls", true)
                },
                FormField {
                    required: false,
                    ..field("source", FieldType::Text, "How did you hear about us?", true)
                },
            ],
            inherit_previous_panel: false,
            panel_background_color: Some("#9333ea".to_string()),
        };

        let goals = StepConfig {
            headline: "What is the most important goal you hope to achieve?".to_string(),
            subheadline: "You can tell us more below.".to_string(),
            panel: PanelContent::Features(FeaturesPanel {
                headline: "Your datasets, models and evaluations in one place.".to_string(),
                features: vec![
                    Feature {
                        title: "Capture Data".to_string(),
                        description: "Record production requests automatically".to_string(),
                        icon: "Database".to_string(),
                    },
                    Feature {
                        title: "Train Models".to_string(),
                        description: "Fine-tune on your own data".to_string(),
                        icon: "Layers".to_string(),
                    },
                    Feature {
                        title: "Automatic Deployment".to_string(),
                        description: "Serve models behind a drop-in API".to_string(),
                        icon: "Rocket".to_string(),
                    },
                    Feature {
                        title: "Evaluate & Compare".to_string(),
                        description: "Measure quality against the baseline".to_string(),
                        icon: "LineChart".to_string(),
                    },
                ],
            }),
            fields: vec![
                FormField {
                    options: options(&[
                        "Lower cost",
                        "Lower latency",
                        "Higher response quality",
                        "Other",
                    ]),
                    ..field("goal", FieldType::MultiSelect, "Goal", true)
                },
                FormField {
                    required: false,
                    ..field("comments", FieldType::Textarea, "Anything else?", true)
                },
            ],
            inherit_previous_panel: false,
            panel_background_color: None,
        };

        let done = StepConfig {
            headline: "You're all set".to_string(),
            subheadline: "We'll be in touch shortly.".to_string(),
            panel: PanelContent::Success(SuccessPanel {
                headline: "Welcome aboard!".to_string(),
                subheadline: "Here's what you've unlocked".to_string(),
                features: vec![
                    SuccessFeature {
                        title: "Unlimited datasets".to_string(),
                        icon: "Database".to_string(),
                    },
                    SuccessFeature {
                        title: "Priority support".to_string(),
                        icon: "Users".to_string(),
                    },
                ],
            }),
            fields: vec![],
            inherit_previous_panel: false,
            panel_background_color: None,
        };

        ModalConfig {
            headline: "Train faster, cheaper models on production data".to_string(),
            value_props,
            logo: String::new(),
            trusted_by_logos: placeholder_logos(),
            branding: Branding {
                company_name: "OpenPipe".to_string(),
                logo: None,
            },
            style: ModalStyle {
                left_panel_color: Some("#f97316".to_string()),
                right_panel_main_color: Some("#FFFFFF".to_string()),
                ..Default::default()
            },
            steps: vec![welcome, models, volume, goals, done],
        }
    }
}
