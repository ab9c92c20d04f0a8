//! Particle Loader Component
//!
//! Animated loading indicator. A [`Loader`] is started when the component
//! mounts and its [`AnimationHandle`] is cancelled when the component is
//! dropped. Each published frame is drawn as an inline SVG.

use dioxus::prelude::*;
use lumen_core::{AnimationHandle, Frame, Loader, LoaderConfig};
use std::rc::Rc;

/// A circle ready to be placed in the SVG.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleNode {
    /// Frame in which the particle was spawned; stable across frames
    pub key: u64,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
}

/// Circles of `frame` in paint order.
///
/// Particles are painted oldest first and one is spawned per frame, so the
/// last circle was spawned in `frame.sequence`, the one before it in the
/// previous frame, and so on.
pub fn circle_nodes(frame: &Frame) -> Vec<CircleNode> {
    let circles: Vec<_> = frame.circles().collect();
    let count = circles.len() as u64;

    circles
        .into_iter()
        .enumerate()
        .map(|(i, (cx, cy, r, color))| CircleNode {
            key: (frame.sequence + 1 + i as u64).saturating_sub(count),
            cx,
            cy,
            r,
            fill: color.to_string(),
        })
        .collect()
}

fn start_animation(config: LoaderConfig) -> Option<Rc<AnimationHandle>> {
    match Loader::new(config) {
        Ok(loader) => Some(Rc::new(AnimationHandle::spawn(loader))),
        Err(e) => {
            tracing::error!("Failed to start loader: {}", e);
            None
        }
    }
}

/// Properties for the ParticleLoader component
#[derive(Clone, PartialEq, Props)]
pub struct ParticleLoaderProps {
    /// Size, palette and motion parameters; read once on mount
    #[props(default)]
    pub config: LoaderConfig,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Renders the particle trail loader
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { class: "loader-container loader-container_black",
///         ParticleLoader {}
///     }
/// }
/// ```
#[component]
pub fn ParticleLoader(props: ParticleLoaderProps) -> Element {
    let size = props.config.size;
    let mut frame = use_signal(Frame::default);

    let config = props.config.clone();
    let handle = use_hook(move || start_animation(config));

    let drop_handle = handle.clone();
    use_drop(move || {
        if let Some(h) = &drop_handle {
            h.cancel();
        }
    });

    use_future(move || {
        let receiver = handle.as_ref().map(|h| h.frames());
        async move {
            let Some(mut receiver) = receiver else {
                return;
            };
            while receiver.changed().await.is_ok() {
                let latest = receiver.borrow_and_update().clone();
                frame.set(latest);
            }
        }
    });

    let circles = circle_nodes(&frame.read());
    let extra_class = props.class.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "lumen-loader {extra_class}",
            svg {
                class: "lumen-loader__canvas",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 {size} {size}",
                role: "progressbar",
                "aria-label": "Loading",
                for node in circles {
                    circle {
                        key: "{node.key}",
                        cx: "{node.cx}",
                        cy: "{node.cy}",
                        r: "{node.r}",
                        fill: "{node.fill}",
                    }
                }
            }
        }
    }
}
