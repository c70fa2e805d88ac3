//! `ChannelObserver` — the [`EngineObserver`] implementation that forwards
//! every callback onto the event channel (§5, §6).

use elevsim_call::StarvationTier;
use elevsim_core::{CallId, CarId};
use elevsim_sim::{EngineObserver, Snapshot};

use crate::channel::DropOldestSender;
use crate::event::{Event, FatalEvent};

pub(crate) struct ChannelObserver<'a> {
    pub(crate) events: &'a DropOldestSender<Event>,
}

impl EngineObserver for ChannelObserver<'_> {
    fn on_assignment(&mut self, call_id: CallId, car_id: CarId) {
        self.events.send(Event::Assignment { call_id, car_id });
    }

    fn on_call_served(&mut self, call_id: CallId, car_id: CarId, wait_ms: u64, travel_ms: u64) {
        self.events.send(Event::CallServed { call_id, car_id, wait_ms, travel_ms });
    }

    fn on_starvation_escalation(&mut self, call_id: CallId, from: StarvationTier, to: StarvationTier, wait_ms: u64) {
        self.events.send(Event::StarvationEscalation { call_id, from: from.into(), to: to.into(), wait_ms });
    }

    fn on_starvation_alarm(&mut self, call_id: CallId, wait_ms: u64) {
        self.events.send(Event::StarvationAlarm { call_id, wait_ms });
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self.events.send(Event::SimulationUpdate(snapshot.clone()));
    }

    fn on_fatal(&mut self, description: &str) {
        self.events.send(Event::Fatal(FatalEvent { description: description.to_string() }));
    }
}
