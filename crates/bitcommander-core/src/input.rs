use log::debug;

use crate::config::ChannelMap;

/// Callback run when a subscribed edge occurs.
pub type Handler = Box<dyn FnMut() + Send + 'static>;

/// Signal transition on a digital line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
}

/// Pin access provided by the host platform.
pub trait InputSource {
    fn read_digital(&mut self, channel: u8) -> bool;

    fn read_analog(&mut self, channel: u8) -> i32;

    /// Run `handler` every time `edge` occurs on `channel`.
    ///
    /// Handlers may fire from interrupt context and must not call back into a
    /// `BandEngine` that the main flow could be using at the same time.
    fn on_edge_event(&mut self, channel: u8, edge: Edge, handler: Handler);

    /// Prepare button lines for edge detection.
    fn enable_edge_events(&mut self, _channels: &[u8]) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Red,
    Yellow,
    Green,
    Blue,
    Joystick,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::Red,
        Button::Yellow,
        Button::Green,
        Button::Blue,
        Button::Joystick,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Button transitions a handler can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Down,
    Up,
}

impl ButtonEvent {
    /// The buttons pull their line high while pressed.
    pub fn edge(self) -> Edge {
        match self {
            ButtonEvent::Down => Edge::Rising,
            ButtonEvent::Up => Edge::Falling,
        }
    }
}

/// Buttons, joystick and dial read through a [`ChannelMap`].
pub struct Inputs<I> {
    source: I,
    channels: ChannelMap,
    events_enabled: bool,
}

impl<I: InputSource> Inputs<I> {
    pub fn new(source: I, channels: ChannelMap) -> Self {
        Self {
            source,
            channels,
            events_enabled: false,
        }
    }

    pub fn channels(&self) -> &ChannelMap {
        &self.channels
    }

    pub fn source(&self) -> &I {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut I {
        &mut self.source
    }

    pub fn button_channel(&self, button: Button) -> u8 {
        match button {
            Button::Red => self.channels.red,
            Button::Yellow => self.channels.yellow,
            Button::Green => self.channels.green,
            Button::Blue => self.channels.blue,
            Button::Joystick => self.channels.joystick_button,
        }
    }

    pub fn read_button(&mut self, button: Button) -> bool {
        let channel = self.button_channel(button);
        self.source.read_digital(channel)
    }

    pub fn read_joystick(&mut self, axis: Axis) -> i32 {
        let channel = match axis {
            Axis::X => self.channels.joystick_x,
            Axis::Y => self.channels.joystick_y,
        };
        self.source.read_analog(channel)
    }

    pub fn read_dial(&mut self) -> i32 {
        self.source.read_analog(self.channels.dial)
    }

    /// Subscribe `handler` to `event` on `button`. The first call arms every
    /// button line.
    pub fn on_event<F>(&mut self, button: Button, event: ButtonEvent, handler: F)
    where
        F: FnMut() + Send + 'static,
    {
        if !self.events_enabled {
            let lines: Vec<u8> = Button::ALL
                .iter()
                .map(|&b| self.button_channel(b))
                .collect();
            debug!("enabling edge events on {:?}", lines);
            self.source.enable_edge_events(&lines);
            self.events_enabled = true;
        }
        let channel = self.button_channel(button);
        self.source
            .on_edge_event(channel, event.edge(), Box::new(handler));
    }
}
