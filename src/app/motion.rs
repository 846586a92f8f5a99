use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer, UseIntersectionObserverReturn};

/// Latches once the observed element has been seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntranceLatch {
    entered: bool,
}

impl EntranceLatch {
    /// Feeds a visibility reading. Returns true only on the reading that trips the latch.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.entered || !visible {
            return false;
        }
        self.entered = true;
        true
    }

    pub fn entered(&self) -> bool {
        self.entered
    }
}

/// True from the first time `target` is visible in the viewport, for as long as the
/// component stays mounted. The observer is disconnected once this trips. Always false
/// during server rendering.
pub fn use_entrance(target: NodeRef<html::Div>) -> Signal<bool> {
    let latch = StoredValue::new(EntranceLatch::default());
    let (entered, set_entered) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } =
        use_intersection_observer(target, move |entries, _| {
            let visible = entries.iter().any(|entry| entry.is_intersecting());
            let tripped = latch
                .try_update_value(|l| l.observe(visible))
                .unwrap_or(false);
            if tripped {
                log::debug!("entrance transition fired");
                set_entered.set(true);
            }
        });

    Effect::watch(
        move || entered.get(),
        move |entered, _, _| {
            if *entered {
                stop();
            }
        },
        false,
    );

    entered.into()
}

/// True once the component has mounted in the browser.
pub fn use_mounted() -> Signal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_trips_once() {
        let mut latch = EntranceLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.entered());
        assert!(latch.observe(true));
        assert!(latch.entered());
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.entered());
    }
}
