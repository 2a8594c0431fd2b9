//! Topic-based event bus implementation.

use std::sync::Arc;

use tokio::sync::broadcast;

use super::types::{PlayerEvent, SimulationEvent, WorldEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Tick reports: attacks and deaths
    Simulation,
    /// Applied and rejected player commands
    Player,
    /// Level changes and game over
    World,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone)]
pub enum Event {
    Simulation(SimulationEvent),
    Player(PlayerEvent),
    World(WorldEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Simulation(_) => Topic::Simulation,
            Event::Player(_) => Topic::Player,
            Event::World(_) => Topic::World,
        }
    }
}

struct Channels {
    simulation: broadcast::Sender<Event>,
    player: broadcast::Sender<Event>,
    world: broadcast::Sender<Event>,
}

impl Channels {
    fn get(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Simulation => &self.simulation,
            Topic::Player => &self.player,
            Topic::World => &self.world,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; slow subscribers lag.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                simulation: broadcast::channel(capacity).0,
                player: broadcast::channel(capacity).0,
                world: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.get(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.get(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crawler_core::Tick;

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(4);
        let mut world = bus.subscribe(Topic::World);
        let mut player = bus.subscribe(Topic::Player);

        bus.publish(Event::World(WorldEvent::GameOver { tick: Tick(3) }));

        match world.recv().await.expect("world event") {
            Event::World(WorldEvent::GameOver { tick }) => assert_eq!(tick, Tick(3)),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(player.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(Event::World(WorldEvent::LevelChanged { from: 0, to: 1 }));
    }
}
