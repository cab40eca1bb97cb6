pub mod analysis {
    pub mod convergence;
    pub mod tolerancecheck;
}

pub mod configuration;

pub mod integrand {
    pub mod integrand;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod quadrature {
        pub mod quadratureerror;
        pub mod quadraturerule;
        pub mod midpoint;
        pub mod trapezoidal;
        pub mod doubleintegral;
        pub mod integrationscheme;
        pub mod integrationschememanager;
    }
    pub mod summation;
}

pub mod output {
    pub mod timestamp;
    pub mod series;
    pub mod seriessink;
}

pub use integrand::integrand::{
    BatchIntegrand,
    FallibleIntegrand,
    FallibleIntegrand2D,
    Integrand,
    Integrand2D,
    ScalarIntegrand,
    ScalarIntegrand2D
};
pub use math::quadrature::doubleintegral::{
    midpoint_double,
    DoubleIntegral
};
pub use math::quadrature::midpoint::{
    midpoint,
    midpoint_vector,
    Midpoint
};
pub use math::quadrature::quadratureerror::QuadratureError;
pub use math::quadrature::quadraturerule::{
    QuadratureGrid,
    QuadratureRule,
    QuadratureRuleType
};
pub use math::quadrature::trapezoidal::{
    trapezoidal,
    Trapezoidal
};
