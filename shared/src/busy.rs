/// A submit control that can show a busy state.
pub trait BusyControl {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_disabled(&self, disabled: bool);
}

/// Holds a control in its busy state; dropping the guard restores the
/// original label and re-enables the control on every exit path.
pub struct BusyGuard<C: BusyControl> {
    control: C,
    original_label: String,
}

impl<C: BusyControl> BusyGuard<C> {
    pub fn acquire(control: C, busy_label: &str) -> Self {
        let original_label = control.label();
        control.set_label(busy_label);
        control.set_disabled(true);
        Self {
            control,
            original_label,
        }
    }

    pub fn original_label(&self) -> &str {
        &self.original_label
    }
}

impl<C: BusyControl> Drop for BusyGuard<C> {
    fn drop(&mut self) {
        self.control.set_label(&self.original_label);
        self.control.set_disabled(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeButton {
        state: Rc<RefCell<(String, bool)>>,
    }

    impl FakeButton {
        fn labelled(label: &str) -> Self {
            let button = Self::default();
            button.state.borrow_mut().0 = label.to_string();
            button
        }

        fn snapshot(&self) -> (String, bool) {
            self.state.borrow().clone()
        }
    }

    impl BusyControl for FakeButton {
        fn label(&self) -> String {
            self.state.borrow().0.clone()
        }

        fn set_label(&self, label: &str) {
            self.state.borrow_mut().0 = label.to_string();
        }

        fn set_disabled(&self, disabled: bool) {
            self.state.borrow_mut().1 = disabled;
        }
    }

    #[test]
    fn acquire_marks_busy_and_drop_restores() {
        let button = FakeButton::labelled("Update");
        let guard = BusyGuard::acquire(button.clone(), "Updating...");
        assert_eq!(button.snapshot(), ("Updating...".to_string(), true));
        assert_eq!(guard.original_label(), "Update");

        drop(guard);
        assert_eq!(button.snapshot(), ("Update".to_string(), false));
    }

    #[test]
    fn early_return_restores() {
        fn submit(button: FakeButton) -> Result<(), &'static str> {
            let _busy = BusyGuard::acquire(button, "Submitting...");
            let sent: Result<(), &'static str> = Err("network down");
            sent?;
            Ok(())
        }

        let button = FakeButton::labelled("Submit");
        assert!(submit(button.clone()).is_err());
        assert_eq!(button.snapshot(), ("Submit".to_string(), false));
    }

    #[test]
    fn panic_restores() {
        let button = FakeButton::labelled("Submit");
        let inner = button.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _busy = BusyGuard::acquire(inner, "Submitting...");
            panic!("callback failed");
        }));
        assert!(result.is_err());
        assert_eq!(button.snapshot(), ("Submit".to_string(), false));
    }
}
