use maud::{html, Markup};

const NAV_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/sessions", "Sessions"),
    ("/matching", "Matching"),
    ("/improve", "Improve"),
    ("/schedule", "Schedule"),
    ("/profile", "Profile"),
];

/// Shared page chrome: head block, top nav, footer.
pub fn page_shell(title: &str, active: &str, content: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="/static/styles.css";
            title { (title) " | Crushers Golf" }
        }
        body {
            nav class="topnav" {
                a class="brand" href="/" { "Crushers Golf" }
                @for (href, label) in NAV_LINKS {
                    a class=(if *href == active { "active" } else { "" }) href=(href) { (label) }
                }
            }
            main class="page" {
                (content)
            }
            footer {
                p { "Crushers Golf demo. All data is synthetic and regenerated per launch seed." }
            }
        }
    }
}
