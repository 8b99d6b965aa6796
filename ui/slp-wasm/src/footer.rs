use slp_core::selectors;

use crate::dom;

/// Write the current year into `#current-year`.
pub fn update_year() {
    if let Some(target) = dom::by_id(selectors::FOOTER_YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        target.set_text_content(Some(&year.to_string()));
    }
}
