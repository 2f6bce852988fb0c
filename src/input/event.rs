/// Platform-agnostic input events.
///
/// These are fed into an [`InputTracker`](super::InputTracker), either
/// directly or through [`RoamEngine::handle_event`](crate::engine::RoamEngine::handle_event).
/// The host forwards whatever its windowing layer produces; the core never
/// registers listeners of its own.
///
/// # Example
///
/// ```ignore
/// engine.handle_event(InputEvent::PointerDelta { dx: 4.0, dy: -2.0 });
/// engine.handle_event(InputEvent::CaptureChanged { active: true });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A movement key was pressed or released.
    Key {
        /// Which movement key changed.
        key: MoveKey,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Relative pointer motion while exclusive capture is active.
    PointerDelta {
        /// Horizontal delta in counts (positive = right).
        dx: f32,
        /// Vertical delta in counts (positive = down).
        dy: f32,
    },
    /// Exclusive pointer capture was granted or revoked by the host.
    CaptureChanged {
        /// `true` when capture is now held, `false` when released or lost.
        active: bool,
    },
}

/// One of the six camera movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    /// Move along the view direction.
    Forward,
    /// Move against the view direction.
    Backward,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
    /// Ascend.
    Up,
    /// Descend.
    Down,
}

impl MoveKey {
    /// Map a physical key string to a movement key.
    ///
    /// Key strings use the `winit::keyboard::KeyCode` debug format
    /// (`"KeyW"`, `"Space"`, `"ShiftLeft"`). Unrecognized codes return
    /// `None` and are ignored by the tracker — they are not an error.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Self::Forward),
            "KeyS" => Some(Self::Backward),
            "KeyA" => Some(Self::Left),
            "KeyD" => Some(Self::Right),
            "Space" => Some(Self::Up),
            "ShiftLeft" => Some(Self::Down),
            _ => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl MoveKey {
    /// Map a winit key code to a movement key, if bound.
    #[must_use]
    pub fn from_key_code(code: winit::keyboard::KeyCode) -> Option<Self> {
        use winit::keyboard::KeyCode;
        match code {
            KeyCode::KeyW => Some(Self::Forward),
            KeyCode::KeyS => Some(Self::Backward),
            KeyCode::KeyA => Some(Self::Left),
            KeyCode::KeyD => Some(Self::Right),
            KeyCode::Space => Some(Self::Up),
            KeyCode::ShiftLeft => Some(Self::Down),
            _ => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit device event into a core event, if it is one the
    /// core consumes (currently raw pointer motion).
    #[must_use]
    pub fn from_device_event(
        event: &winit::event::DeviceEvent,
    ) -> Option<Self> {
        match event {
            winit::event::DeviceEvent::MouseMotion { delta: (dx, dy) } => {
                Some(Self::PointerDelta {
                    dx: *dx as f32,
                    dy: *dy as f32,
                })
            }
            _ => None,
        }
    }
}
