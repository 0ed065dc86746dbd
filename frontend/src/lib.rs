pub mod components;

use components::RootView;
use web_sys::Element;

/// Id of the mount point declared by `index.html`.
pub const ROOT_ID: &str = "root";

/// Where [`RootView`] ends up in the host page.
#[derive(Debug, PartialEq, Eq)]
pub enum MountPoint<E> {
    Root(E),
    Body,
}

impl<E> MountPoint<E> {
    /// Picks the `#root` element when the host page has one, otherwise `<body>`.
    pub fn resolve(root: Option<E>) -> Self {
        match root {
            Some(element) => MountPoint::Root(element),
            None => {
                log::warn!("No #{} element in host page, mounting under <body>", ROOT_ID);
                MountPoint::Body
            }
        }
    }
}

pub fn find_root() -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(ROOT_ID)
}

pub fn mount(root: Option<Element>) {
    match MountPoint::resolve(root) {
        MountPoint::Root(element) => {
            log::info!("Mounting RootView under #{}", element.id());
            yew::Renderer::<RootView>::with_root(element).render();
        }
        MountPoint::Body => {
            yew::Renderer::<RootView>::new().render();
        }
    }
}
