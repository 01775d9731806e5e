pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod container;
        pub mod load;
        pub mod remove_item;
        pub mod set_quantity;
    }
    pub mod favorite {
        pub mod get_all;
        pub mod toggle;
    }
    pub mod order {
        pub mod create_order;
        pub mod get_all;
        pub mod get_items;
    }
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod state;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod load;
            pub mod remove_item;
            pub mod set_quantity;
        }
    }
    pub mod favorite {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod toggle;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create_order;
            pub mod get_all;
            pub mod get_items;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
}
