//! The header shown at the top of every page, with the app name and its links.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the header.
///
/// It will change appearance if `is_current` is set to `true`. Only one link
/// should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "pb-1 text-white border-b-2 border-orange-400"
        } else {
            "pb-1 text-slate-300 hover:text-white"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the header.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![Link {
            url: endpoints::DASHBOARD_VIEW,
            title: "Listagem",
            is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
        }];

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            header class="bg-indigo-700 dark:bg-slate-800"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto px-6 py-6"
                {
                    a
                        href=(endpoints::ROOT)
                        class="text-2xl font-semibold whitespace-nowrap text-white"
                    {
                        "Finance Dashboard"
                    }

                    nav
                    {
                        ul class="flex space-x-8 font-medium"
                        {
                            @for link in self.links {
                                li { (link.into_html()) }
                            }
                        }
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod nav_bar_tests {
    use crate::{endpoints, navigation::NavBar};

    #[test]
    fn dashboard_link_is_active_on_dashboard() {
        let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

        assert!(nav_bar.links.iter().all(|link| link.is_current));
    }

    #[test]
    fn no_link_is_active_elsewhere() {
        for endpoint in [
            endpoints::ROOT,
            endpoints::INTERNAL_ERROR_VIEW,
            endpoints::TRANSACTIONS_API,
        ] {
            let nav_bar = NavBar::new(endpoint);

            assert!(
                nav_bar.links.iter().all(|link| !link.is_current),
                "no link should be active for {endpoint}"
            );
        }
    }

    #[test]
    fn renders_current_link_with_aria_current() {
        let html = NavBar::new(endpoints::DASHBOARD_VIEW)
            .into_html()
            .into_string();

        assert!(html.contains(r#"aria-current="page""#));
    }
}
