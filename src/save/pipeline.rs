use std::panic::{self, AssertUnwindSafe};

use super::{Decision, SaveListener};
use crate::element::Rectangle;
use crate::error::ListenerError;

/// Ordered chain of listeners deciding whether a box gets committed
#[derive(Default)]
pub struct SavePipeline {
    listeners: Vec<Box<dyn SaveListener>>,
}

impl std::fmt::Debug for SavePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SavePipeline")
            .field("listeners", &format!("<{} listeners>", self.listeners.len()))
            .finish()
    }
}

impl SavePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener. Listeners run in registration order.
    pub fn register(&mut self, listener: impl SaveListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Ask every listener in turn; the first veto or fault ends the run.
    pub fn evaluate(&mut self, rect: &Rectangle) -> Decision {
        for (index, listener) in self.listeners.iter_mut().enumerate() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| listener.on_save(rect)))
                .unwrap_or_else(|_| Err(ListenerError::failed("listener panicked")));

            match outcome {
                Ok(true) => continue,
                Ok(false) => {
                    log::debug!("Save listener #{} ({}) vetoed box", index, listener.name());
                    return Decision::Reject;
                }
                Err(err) => {
                    log::warn!("Save listener #{} ({}) failed, rejecting box: {}", index, listener.name(), err);
                    return Decision::Reject;
                }
            }
        }

        Decision::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn rect() -> Rectangle {
        Rectangle::new(0.0, 0.0, 10.0, 10.0, Color32::RED)
    }

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str, answer: bool)
        -> impl FnMut(&Rectangle) -> Result<bool, ListenerError> + 'static
    {
        let log = Rc::clone(log);
        move |_: &Rectangle| {
            log.borrow_mut().push(name);
            Ok(answer)
        }
    }

    #[test]
    fn test_empty_pipeline_accepts() {
        let mut pipeline = SavePipeline::new();
        assert_eq!(pipeline.evaluate(&rect()), Decision::Accept);
    }

    #[test]
    fn test_all_true_accepts_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut pipeline = SavePipeline::new();
        pipeline.register(recorder(&calls, "first", true));
        pipeline.register(recorder(&calls, "second", true));

        assert_eq!(pipeline.evaluate(&rect()), Decision::Accept);
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_veto_short_circuits() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut pipeline = SavePipeline::new();
        pipeline.register(recorder(&calls, "veto", false));
        pipeline.register(recorder(&calls, "never", true));

        assert_eq!(pipeline.evaluate(&rect()), Decision::Reject);
        assert_eq!(*calls.borrow(), vec!["veto"]);
    }

    #[test]
    fn test_error_counts_as_veto() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut pipeline = SavePipeline::new();
        pipeline.register(|_: &Rectangle| -> Result<bool, ListenerError> {
            Err(ListenerError::failed("boom"))
        });
        pipeline.register(recorder(&calls, "never", true));

        assert_eq!(pipeline.evaluate(&rect()), Decision::Reject);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_panic_counts_as_veto() {
        let mut pipeline = SavePipeline::new();
        pipeline.register(|_: &Rectangle| -> Result<bool, ListenerError> {
            panic!("listener bug")
        });

        assert_eq!(pipeline.evaluate(&rect()), Decision::Reject);
        // Still registered and still consulted next time
        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline.evaluate(&rect()), Decision::Reject);
    }
}
