pub mod axis;
pub mod kind;
pub mod vector;

pub(crate) mod num;

pub type FloatNum = f64;

pub type Position = vector::Vector<kind::Position>;

pub type Velocity = vector::Vector<kind::Velocity>;

pub type Acceleration = vector::Vector<kind::Acceleration>;

pub type Force = vector::Vector<kind::Force>;

pub type Momentum = vector::Vector<kind::Momentum>;
