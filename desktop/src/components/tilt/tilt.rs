//! Element that tilts toward the pointer.
use super::options::TiltOptions;
use super::transform::{tilt_at, Bounds, TiltPose};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TiltProps {
    #[prop_or_default]
    pub options: TiltOptions,

    #[prop_or_default]
    pub children: Children,
}

#[function_component(Tilt)]
pub fn tilt(props: &TiltProps) -> Html {
    let root_ref = use_node_ref();
    let pose = use_state_eq(TiltPose::rest);

    let onmousemove = {
        let root_ref = root_ref.clone();
        let pose = pose.clone();
        let options = props.options.clone();

        Callback::from(move |e: MouseEvent| {
            let Some(root) = root_ref.cast::<web_sys::Element>() else {
                return;
            };

            let bounds = Bounds::from(root.get_bounding_client_rect());
            let point = (e.client_x() as f64, e.client_y() as f64);
            pose.set(tilt_at(&options, bounds, point));
        })
    };

    let onmouseleave = {
        let pose = pose.clone();
        Callback::from(move |_: MouseEvent| {
            pose.set(TiltPose::rest());
        })
    };

    let options = &props.options;
    let style = format!(
        "transform: {}; transition: transform {}ms ease-out; will-change: transform;",
        pose.transform(options),
        options.speed,
    );

    html! {
        <div ref={root_ref}
            class={classes!("tilt-root")}
            {style}
            {onmousemove}
            {onmouseleave}>

            <div class={classes!("tilt-child")}>
                { for props.children.iter() }
            </div>
            if options.glare {
                <div class={classes!("js-tilt-glare")}>
                    <div class={classes!("js-tilt-glare-inner")}
                        style={format!(
                            "transform: {}; opacity: {};",
                            pose.glare_transform(),
                            pose.glare_opacity,
                        )}>
                    </div>
                </div>
            }
        </div>
    }
}
