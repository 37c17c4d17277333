//! # formtree-forms
//!
//! Web forms modeled as composable trees of fields and sub-forms. A built
//! tree derives two artifacts: a display specification telling a frontend
//! how to render the form, and a JSON-Schema-draft-07-compatible data schema
//! describing the shape of a valid submission. Submitted documents can be
//! validated against the tree, producing per-path violation reports.
//!
//! Trees are immutable after construction; all derivations are pure
//! read-only walks and safe to run concurrently.
//!
//! ```
//! use formtree_forms::constraints;
//! use formtree_forms::fields::Field;
//! use formtree_forms::form::Form;
//!
//! let person = Form::builder("Person")
//!     .child(
//!         Form::builder("Name")
//!             .child(Field::text("First Name"))
//!             .child(Field::text("Last Name"))
//!             .build()?,
//!     )
//!     .child(Field::integer("Age").required(false).constraint(constraints::ge(0)))
//!     .build()?;
//!
//! let display_spec = person.display();
//! let data_schema = person.data_schema();
//! # Ok::<(), formtree_core::FormtreeError>(())
//! ```

pub mod constraints;
pub mod display;
pub mod fields;
pub mod form;
pub mod paths;
pub mod schema;
pub mod validation;
pub mod widgets;

// Re-export the most commonly used types at the crate root.
pub use constraints::Constraint;
pub use fields::{DataType, Field};
pub use form::{Form, FormBuilder, Node};
pub use validation::{ValidationReport, Violation, ViolationKind};
pub use widgets::Widget;
