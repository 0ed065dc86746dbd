use shared::{Asset, HEADING, LOGO_ALT, LOGO_CLASS, OCTAL_URL};
use yew::prelude::*;

/// Logo linking out to the school site, followed by the page heading.
#[function_component(RootView)]
pub fn root_view() -> Html {
    html! {
        <>
            <div>
                <a href={OCTAL_URL} target="_blank">
                    <img src={Asset::OctalLogo.path()} class={LOGO_CLASS} alt={LOGO_ALT} />
                </a>
            </div>
            <h1>{ HEADING }</h1>
        </>
    }
}
