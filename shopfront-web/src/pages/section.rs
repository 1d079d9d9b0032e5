use crate::routes::Route;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct SectionPageProps {
    pub route: Route,
}

/// Frame for sections whose views are mounted by the host page.
#[function_component(SectionPage)]
pub fn section_page(props: &SectionPageProps) -> Html {
    let path = yew_router::Routable::to_path(&props.route);
    html! {
        <section class="p-6" data-route={path}>
            <h1 class="text-2xl font-semibold">{ props.route.title() }</h1>
        </section>
    }
}
