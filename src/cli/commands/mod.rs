pub mod abstract_factory_example;
pub mod abstract_factory_generic;
pub mod factory_method_example;
pub mod factory_method_generic;
pub mod platforms;

pub use abstract_factory_example::*;
pub use abstract_factory_generic::*;
pub use factory_method_example::*;
pub use factory_method_generic::*;
pub use platforms::*;
