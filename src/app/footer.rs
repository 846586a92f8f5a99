use leptos::prelude::*;

use crate::clock::{copyright_notice, Clock};
use crate::content::PROFILE;

#[component]
pub fn Footer<C>(clock: C) -> impl IntoView
where
    C: Clock + 'static,
{
    view! {
        <footer class="py-10 text-center text-xs text-muted-foreground">
            {copyright_notice(PROFILE.name, &clock)}
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::app::render;
    use crate::clock::FixedClock;

    #[test]
    fn test_footer_year_follows_clock() {
        let html = render(|| {
            let clock = FixedClock(NaiveDate::from_ymd_opt(2029, 6, 15).unwrap());
            view! { <Footer clock /> }
        });
        assert!(html.contains("© 2029 Daniel Olanrewaju. All rights reserved."));

        let html = render(|| {
            let clock = FixedClock(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
            view! { <Footer clock /> }
        });
        assert!(html.contains("© 2030 Daniel Olanrewaju"));
    }
}
