//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button - accessibility and click gating without visual styling.
/// Used internally by Button.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            disabled,
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Green background - for the main action
    Primary,
    /// Gray background - for card and secondary actions
    Secondary,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding, text-sm
    Small,
    /// Standard padding
    Medium,
}

/// Button with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = match size {
        ButtonSize::Small => "inline-flex items-center justify-center gap-2 text-sm rounded-md transition-colors",
        ButtonSize::Medium => "inline-flex items-center justify-center gap-2 rounded-md transition-colors",
    };

    let padding = match size {
        ButtonSize::Small => "px-3 py-1.5",
        ButtonSize::Medium => "px-6 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-green-600 hover:bg-green-700 text-white font-semibold disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "bg-gray-700 hover:bg-gray-600 text-gray-100 disabled:opacity-50 disabled:cursor-not-allowed"
        }
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            class: Some(computed_class),
            r#type: Some("button"),
            onclick,
            {children}
        }
    }
}
