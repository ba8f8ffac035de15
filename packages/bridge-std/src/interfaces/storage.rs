// Keys of the shared interfaces live in their own enums so they cannot collide with a
// contract's own `DataKey`.

pub mod owner {
    use soroban_sdk::contracttype;

    #[contracttype]
    #[allow(non_camel_case_types)]
    pub enum DataKey {
        Interfaces_Owner,
    }
}

pub mod pausable {
    use soroban_sdk::contracttype;

    #[contracttype]
    #[allow(non_camel_case_types)]
    pub enum DataKey {
        Interfaces_Paused,
    }
}

pub mod migrating {
    use soroban_sdk::contracttype;

    #[contracttype]
    #[allow(non_camel_case_types)]
    pub enum DataKey {
        Interfaces_Migrating,
    }
}
