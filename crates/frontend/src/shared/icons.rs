use leptos::prelude::*;

macro_rules! svg_icon {
    ($size:tt, $($body:tt)*) => {
        view! {
            <svg width=$size height=$size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                $($body)*
            </svg>
        }.into_any()
    };
}

pub fn icon(name: &str) -> AnyView {
    match name {
        "dashboard" => svg_icon!("20",
            <rect x="3" y="3" width="7" height="9" rx="1"/>
            <rect x="14" y="3" width="7" height="5" rx="1"/>
            <rect x="14" y="12" width="7" height="9" rx="1"/>
            <rect x="3" y="16" width="7" height="5" rx="1"/>
        ),
        "users" => svg_icon!("20",
            <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        ),
        "products" => svg_icon!("20",
            <path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/>
            <path d="M3.27 6.96 12 12l8.73-5.04"/>
            <path d="M12 22V12"/>
        ),
        "orders" => svg_icon!("20",
            <circle cx="9" cy="21" r="1"/>
            <circle cx="20" cy="21" r="1"/>
            <path d="M1 1h4l2.68 12.39a2 2 0 0 0 2 1.61h7.72a2 2 0 0 0 2-1.61L23 6H6"/>
        ),
        "suppliers" => svg_icon!("20",
            <path d="M3 7h13v10H3z"/>
            <path d="M16 7h3l2 3v7h-5z"/>
            <circle cx="7.5" cy="18" r="1.5"/>
            <circle cx="18.5" cy="18" r="1.5"/>
        ),
        "search" => svg_icon!("16",
            <circle cx="11" cy="11" r="8"/>
            <path d="m21 21-4.35-4.35"/>
        ),
        "filter" => svg_icon!("16",
            <polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3"/>
        ),
        "refresh" => svg_icon!("16",
            <polyline points="23 4 23 10 17 10"/>
            <polyline points="1 20 1 14 7 14"/>
            <path d="M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"/>
        ),
        "more" => svg_icon!("16",
            <circle cx="12" cy="5" r="1"/>
            <circle cx="12" cy="12" r="1"/>
            <circle cx="12" cy="19" r="1"/>
        ),
        "eye" => svg_icon!("16",
            <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/>
            <circle cx="12" cy="12" r="3"/>
        ),
        "edit" => svg_icon!("16",
            <path d="M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"/>
            <path d="M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"/>
        ),
        "delete" => svg_icon!("16",
            <polyline points="3 6 5 6 21 6"/>
            <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
            <path d="M10 11v6M14 11v6"/>
            <path d="M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2"/>
        ),
        "plus" => svg_icon!("16",
            <line x1="12" y1="5" x2="12" y2="19"/>
            <line x1="5" y1="12" x2="19" y2="12"/>
        ),
        "x" => svg_icon!("16",
            <line x1="18" y1="6" x2="6" y2="18"/>
            <line x1="6" y1="6" x2="18" y2="18"/>
        ),
        "logout" => svg_icon!("16",
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
            <polyline points="16 17 21 12 16 7"/>
            <line x1="21" y1="12" x2="9" y2="12"/>
        ),
        "chevron-left" => svg_icon!("16",
            <polyline points="15 18 9 12 15 6"/>
        ),
        "chevron-right" => svg_icon!("16",
            <polyline points="9 18 15 12 9 6"/>
        ),
        _ => svg_icon!("16",
            <circle cx="12" cy="12" r="10"/>
        ),
    }
}
