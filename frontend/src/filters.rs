//! Auto-submit of the complaint filter form when a select changes.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::AutoSubmitSchedule;
use shared::config::FiltersSection;
use web_sys::{Element, HtmlFormElement, HtmlSelectElement};

use crate::dom::{self, query_all};
use crate::error::{PageError, describe_js};
use crate::logging;

pub fn attach(form: &HtmlFormElement, rules: &FiltersSection) -> Result<(), PageError> {
    let form_root: &Element = form;
    let selects = query_all::<HtmlSelectElement>(form_root, "select")?;
    let schedule = Rc::new(AutoSubmitSchedule::new(rules.debounce));
    let delay_ms = rules.auto_submit_delay_ms;

    for select in &selects {
        let form = form.clone();
        let schedule = Rc::clone(&schedule);
        dom::listen(select, "change", move |_| {
            let ticket = schedule.schedule();
            let form = form.clone();
            let schedule = Rc::clone(&schedule);
            Timeout::new(delay_ms, move || {
                if !schedule.should_submit(ticket) {
                    return;
                }
                if let Err(error) = form.submit() {
                    logging::error(&format!("Filter auto-submit failed: {}", describe_js(&error)));
                }
            })
            .forget();
        })?;
    }

    logging::info(&format!(
        "Filter auto-submit armed on {} select(s), {:?} scope",
        selects.len(),
        schedule.scope()
    ));
    Ok(())
}
