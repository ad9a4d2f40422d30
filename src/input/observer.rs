//! Scroll/touch/pointer observer contract.

use serde::{Deserialize, Serialize};

/// Raw gesture sources the observer can listen to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    Wheel,
    Touch,
    Pointer,
}

/// A raw vertical gesture. `delta` is in pixels, positive downwards.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Gesture {
    pub kind: GestureKind,
    pub delta: f32,
}

impl Gesture {
    pub fn new(kind: GestureKind, delta: f32) -> Self {
        Self { kind, delta }
    }
}

/// Direction a gesture was classified as.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Swipe {
    Up,
    Down,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub event_types: Vec<GestureKind>,
    /// Multiplier applied to wheel deltas.
    pub wheel_speed: f32,
    /// Minimum travel (px) before a gesture counts.
    pub tolerance: f32,
    /// Whether the host should suppress the page's own scrolling.
    pub prevent_default: bool,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            event_types: vec![GestureKind::Wheel, GestureKind::Touch, GestureKind::Pointer],
            wheel_speed: -1.0,
            tolerance: 10.0,
            prevent_default: true,
        }
    }
}

impl ObserverConfig {
    /// Classify a gesture, or `None` if it is filtered out.
    pub fn classify(&self, gesture: &Gesture) -> Option<Swipe> {
        if !self.event_types.contains(&gesture.kind) {
            return None;
        }
        let amount = match gesture.kind {
            GestureKind::Wheel => gesture.delta * self.wheel_speed,
            GestureKind::Touch | GestureKind::Pointer => gesture.delta,
        };
        if !amount.is_finite() || amount.abs() < self.tolerance {
            return None;
        }
        Some(if amount > 0.0 { Swipe::Down } else { Swipe::Up })
    }
}

/// Handle to a created observer.
pub trait GestureObserver {
    fn enable(&mut self);
    fn disable(&mut self);
    fn is_enabled(&self) -> bool;
}

/// Creates observers from a config.
pub trait ObserverService {
    type Handle: GestureObserver;

    fn create_observer(&mut self, config: &ObserverConfig) -> Self::Handle;
}

/// Observer that only tracks whether it is enabled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadlessObserver {
    enabled: bool,
    toggles: usize,
}

impl HeadlessObserver {
    /// How many times the enabled flag actually changed.
    pub fn toggles(&self) -> usize {
        self.toggles
    }
}

impl GestureObserver for HeadlessObserver {
    fn enable(&mut self) {
        if !self.enabled {
            self.enabled = true;
            self.toggles += 1;
        }
    }

    fn disable(&mut self) {
        if self.enabled {
            self.enabled = false;
            self.toggles += 1;
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// [`ObserverService`] producing [`HeadlessObserver`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessObservers;

impl ObserverService for HeadlessObservers {
    type Handle = HeadlessObserver;

    fn create_observer(&mut self, config: &ObserverConfig) -> HeadlessObserver {
        log::debug!("observer created for {:?}", config.event_types);
        // Observers start enabled; the controller switches them off until open.
        HeadlessObserver {
            enabled: true,
            toggles: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_gestures_are_filtered() {
        let config = ObserverConfig::default();
        assert_eq!(config.classify(&Gesture::new(GestureKind::Touch, 4.0)), None);
        assert_eq!(
            config.classify(&Gesture::new(GestureKind::Touch, 25.0)),
            Some(Swipe::Down)
        );
    }

    #[test]
    fn wheel_speed_inverts_wheel_deltas() {
        let config = ObserverConfig::default();
        assert_eq!(
            config.classify(&Gesture::new(GestureKind::Wheel, 40.0)),
            Some(Swipe::Up)
        );
        assert_eq!(
            config.classify(&Gesture::new(GestureKind::Pointer, 40.0)),
            Some(Swipe::Down)
        );
    }

    #[test]
    fn unobserved_kinds_are_filtered() {
        let config = ObserverConfig {
            event_types: vec![GestureKind::Wheel],
            ..ObserverConfig::default()
        };
        assert_eq!(config.classify(&Gesture::new(GestureKind::Touch, 100.0)), None);
    }

    #[test]
    fn headless_observer_counts_real_toggles() {
        let mut observer = HeadlessObservers.create_observer(&ObserverConfig::default());
        assert!(observer.is_enabled());

        observer.disable();
        observer.disable();
        observer.enable();

        assert!(observer.is_enabled());
        assert_eq!(observer.toggles(), 2);
    }
}
