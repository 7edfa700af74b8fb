//! # dxf-assembler
//!
//! Turns the record stream of a DXF drawing into a flat collection of typed
//! entities.
//!
//! A scanner walks the file and issues one call per record on an
//! [`EventReceiver`]. The [`EntityAssembler`] receiver keeps the current
//! presentation attributes, wraps simple records as they arrive, and runs two
//! small state machines that collect polylines and splines across several
//! records.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_assembler::Drawing;
//!
//! let drawing = Drawing::from_file("sample.dxf")?;
//! for entity in &drawing {
//!     println!("{} on {}", entity.kind_name(), entity.layer());
//! }
//! for n in drawing.notifications() {
//!     eprintln!("{n}");
//! }
//! # Ok::<(), dxf_assembler::DxfError>(())
//! ```
//!
//! Events can also be fed directly, without a file:
//!
//! ```rust
//! use dxf_assembler::{EntityAssembler, EventReceiver, PolylineBegin, Vertex, Vector3};
//!
//! let mut asm = EntityAssembler::new();
//! asm.add_polyline(PolylineBegin::new(2));
//! asm.add_vertex(Vertex::new(Vector3::new(0.0, 0.0, 0.0)));
//! asm.add_vertex(Vertex::new(Vector3::new(1.0, 0.0, 0.0)));
//! let drawing = asm.finish();
//! assert_eq!(drawing.len(), 1);
//! ```

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assembler;
pub mod attributes;
pub mod drawing;
pub mod entities;
pub mod error;
pub mod events;
pub mod io;
pub mod notification;
pub mod types;

pub use assembler::{AssemblerConfiguration, EntityAssembler};
pub use attributes::Attributes;
pub use drawing::Drawing;
pub use error::{DxfError, Result};
pub use events::{DrawingEvent, EventReceiver, PolylineBegin, SplineBegin};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use types::{Color, LineWeight, Vector3};

pub use entities::{
    Arc, Circle, ControlPoint, Ellipse, Entity, EntityType, Line, MText, Point, Polyline, Spline,
    Text, Vertex,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
