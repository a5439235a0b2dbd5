#![allow(dead_code)]

use std::cell::RefCell;

use triplex::{BehaviorInvoker, BindingEvent, TriplexConfig};

// Init logger for tests
#[ctor::ctor]
fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// A sub-behavior invocation, recorded with the binding and the position of the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Press(&'static str, u32),
    Release(&'static str, u32),
}

/// Invoker which records every invocation into a shared log
pub struct RecordingInvoker<'l> {
    pub log: &'l RefCell<Vec<Call>>,
}

impl<'l> RecordingInvoker<'l> {
    pub fn new(log: &'l RefCell<Vec<Call>>) -> Self {
        Self { log }
    }
}

impl BehaviorInvoker<&'static str> for RecordingInvoker<'_> {
    fn press(&mut self, binding: &&'static str, event: BindingEvent) {
        self.log.borrow_mut().push(Call::Press(*binding, event.position));
    }

    fn release(&mut self, binding: &&'static str, event: BindingEvent) {
        self.log.borrow_mut().push(Call::Release(*binding, event.position));
    }
}

/// Take all recorded calls, leaving the log empty
pub fn take_calls(log: &RefCell<Vec<Call>>) -> Vec<Call> {
    std::mem::take(&mut *log.borrow_mut())
}

/// Triplex with first-press `A`, hold `B`, interrupt `C`, sharing position 5 and layer 1
pub fn abc_config() -> TriplexConfig<&'static str> {
    TriplexConfig::new(["A", "B", "C"], &[5], &[1]).unwrap()
}

/// Triplex with first-press `X`, hold `Y`, interrupt `Z`, sharing nothing
pub fn xyz_config() -> TriplexConfig<&'static str> {
    TriplexConfig::exclusive(["X", "Y", "Z"])
}

pub fn at(position: u32) -> BindingEvent {
    BindingEvent::now(position)
}
