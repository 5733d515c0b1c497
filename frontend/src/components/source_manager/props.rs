//! Properties of the `SourceManagerComponent`.

use yew::prelude::*;

use crate::api::SOURCES_API_PATH;

#[derive(Properties, PartialEq, Clone)]
pub struct SourceManagerProps {
    /// Base path of the sources API. Defaults to `/api/sources` on the page origin.
    #[prop_or(AttrValue::Static(SOURCES_API_PATH))]
    pub api_base: AttrValue,

    /// Load the source list as soon as the component is mounted.
    #[prop_or(true)]
    pub load_on_mount: bool,
}
