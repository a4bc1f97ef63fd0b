// SPDX-License-Identifier: MPL-2.0
//! Static navigation model shared by the header and footer.
//!
//! Entry order is fixed at build time and does not depend on the locale;
//! only the rendered labels change, resolved through the i18n layer at view
//! time. Routing itself belongs to a collaborator - the shell emits
//! navigate events and remembers the current route for rendering.

/// Pages the shell can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Workers,
    Pricing,
    Contact,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Workers => "/workers",
            Route::Pricing => "/pricing",
            Route::Contact => "/contact",
        }
    }

    /// i18n key for the page's placeholder content title.
    pub const fn title_key(self) -> &'static str {
        match self {
            Route::Home => "page-home-title",
            Route::About => "page-about-title",
            Route::Workers => "page-workers-title",
            Route::Pricing => "page-pricing-title",
            Route::Contact => "page-contact-title",
        }
    }
}

/// What activating a menu entry does: navigate, or trigger a
/// fire-and-forget document download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Route(Route),
    Download(&'static str),
}

/// One navigable or actionable item in a fixed navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// Translation key for the display label.
    pub key: &'static str,
    pub target: MenuTarget,
}

/// Which fixed list a shell region exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRole {
    PrimaryNav,
    FooterNav,
}

/// Embedded asset path of the downloadable company profile document.
pub const COMPANY_PROFILE_PATH: &str = "docs/company-profile.pdf";

const PRIMARY_NAV: &[MenuEntry] = &[
    MenuEntry {
        key: "nav-about",
        target: MenuTarget::Route(Route::About),
    },
    MenuEntry {
        key: "nav-workers",
        target: MenuTarget::Route(Route::Workers),
    },
    MenuEntry {
        key: "nav-pricing",
        target: MenuTarget::Route(Route::Pricing),
    },
    MenuEntry {
        key: "nav-contact",
        target: MenuTarget::Route(Route::Contact),
    },
];

const FOOTER_NAV: &[MenuEntry] = &[
    MenuEntry {
        key: "nav-about",
        target: MenuTarget::Route(Route::About),
    },
    MenuEntry {
        key: "nav-contact",
        target: MenuTarget::Route(Route::Contact),
    },
    MenuEntry {
        key: "nav-company-profile",
        target: MenuTarget::Download(COMPANY_PROFILE_PATH),
    },
];

/// The ordered entries for a region.
pub fn entries(role: MenuRole) -> &'static [MenuEntry] {
    match role {
        MenuRole::PrimaryNav => PRIMARY_NAV,
        MenuRole::FooterNav => FOOTER_NAV,
    }
}
