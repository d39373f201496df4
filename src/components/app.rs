use yew::prelude::*;

use super::{MarkerMapScreen, QuickMapScreen};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    QuickMap,
    MarkerMap,
}

/// Shell de la app: header con el switcher de pantallas.
/// Cada pantalla es dueña de su estado; cambiar de tab lo descarta.
#[function_component(App)]
pub fn app() -> Html {
    let screen = use_state(|| Screen::QuickMap);

    let go_quick = {
        let screen = screen.clone();
        Callback::from(move |_: MouseEvent| screen.set(Screen::QuickMap))
    };

    let go_markers = {
        let screen = screen.clone();
        Callback::from(move |_: MouseEvent| screen.set(Screen::MarkerMap))
    };

    html! {
        <>
            <header class="app-header">
                <h1>{"GeoPin"}</h1>
                <nav class="screen-tabs">
                    <button class={tab_class(*screen == Screen::QuickMap)} onclick={go_quick}>
                        {"🗺️ Mapa"}
                    </button>
                    <button class={tab_class(*screen == Screen::MarkerMap)} onclick={go_markers}>
                        {"📍 Marcadores"}
                    </button>
                </nav>
            </header>
            {
                match *screen {
                    Screen::QuickMap => html! { <QuickMapScreen /> },
                    Screen::MarkerMap => html! { <MarkerMapScreen /> },
                }
            }
        </>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab active"
    } else {
        "tab"
    }
}
