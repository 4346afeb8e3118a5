//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    accessibility::AccessibilityPage, archive_edit::ArchiveEditPage,
    background_removal::BackgroundRemovalPage, create_project::CreateProjectPage,
    home::HomePage, palette::PaletteGeneratorPage, svg_converter::SvgConverterPage,
};

/// Root application component.
///
/// Each tool page is self-contained: pages own their signals and talk to the
/// backend directly, so no cross-page state contexts are needed.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/huevault.css"/>
        <Title text="HueVault"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("palette") view=PaletteGeneratorPage/>
                <Route path=StaticSegment("accessibility") view=AccessibilityPage/>
                <Route path=StaticSegment("background-removal") view=BackgroundRemovalPage/>
                <Route path=StaticSegment("svg-converter") view=SvgConverterPage/>
                <Route
                    path=(StaticSegment("projects"), StaticSegment("create"))
                    view=CreateProjectPage
                />
                <Route
                    path=(
                        StaticSegment("archives"),
                        ParamSegment("username"),
                        StaticSegment("edit"),
                    )
                    view=ArchiveEditPage
                />
            </Routes>
        </Router>
    }
}
