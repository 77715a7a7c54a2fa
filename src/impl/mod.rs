// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod archive_datasource;
        pub(crate) mod tables_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod date_model;
        pub(crate) mod datetime_model;
        pub(crate) mod flag_model;
        pub(crate) mod money_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod backup_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account;
        pub(crate) mod debt;
        pub(crate) mod invoice;
        pub(crate) mod item;
        pub(crate) mod payment;
        pub(crate) mod period;
        pub(crate) mod posting;
        pub(crate) mod records;
        pub(crate) mod store;
        pub(crate) mod tax;
        pub(crate) mod warning;
    }
    pub(crate) mod logic {
        pub(crate) mod debt_decomposition;
        mod money;
        pub(crate) mod monthly_driver;
        pub(crate) mod payment_allocator;
        pub(crate) mod posting_builder;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod backup_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod export_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod crosscheck_printer;
    pub(crate) mod datev_printer;
    pub(crate) mod summary_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::account::*;
        pub use crate::domain::entities::debt::*;
        pub use crate::domain::entities::invoice::*;
        pub use crate::domain::entities::item::*;
        pub use crate::domain::entities::payment::*;
        pub use crate::domain::entities::period::*;
        pub use crate::domain::entities::posting::*;
        pub use crate::domain::entities::records::*;
        pub use crate::domain::entities::store::*;
        pub use crate::domain::entities::tax::*;
        pub use crate::domain::entities::warning::*;
    }
}
