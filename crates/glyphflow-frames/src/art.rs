//! Built-in demo diagram.
//!
//! The sweep and bar slots of the demo scene sit on blank runs of this
//! art: the sweep on row 14, columns 14-29, and the bar inside the
//! progress box on row 19, columns 1-10 (relative to [`DEMO_ORIGIN`]).

use glyphflow_core::GridPos;

/// Grid position the diagram is drawn at.
pub const DEMO_ORIGIN: GridPos = GridPos::new(3, 2);

/// A small validator pipeline, drawn as one static frame.
pub const DEMO_DIAGRAM: &str = "\
┌──────────┐    packets        ┌─────────────┐
│ Receiver ├──────────────────▶│ ShredFilter │
└──────────┘                   └──────┬──────┘
                                      │
                                      ▼
                               ┌─────────────┐
                               │ Blockstore  │
                               └──────┬──────┘
                                      │ entries
                                      │
┌──────────┐                          │
│   Bank   │◀─────────────────────────┘
└──────────┘
┌──────────┐                  ┌──────────┐
│  Replay  ├──                │  Voting  │
└──────────┘                  └──────────┘

 progress
┌──────────┐
│          │
└──────────┘";
