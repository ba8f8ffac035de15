/// Return with an error if a condition is not met.
///
/// Simplifies the pattern of checking for a condition and returning with an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr $(,)?) => {
        if !$cond {
            return Err($e);
        }
    };
}

// The macros below are test helpers. They keep the intent of a test readable at the call site.

/// Assert that a [`Result`] is [`Ok`] and return the contained value.
#[macro_export]
macro_rules! assert_ok {
    ( $x:expr ) => {
        match $x {
            Ok(v) => v,
            Err(e) => {
                panic!("Error calling {}: {:?}", stringify!($x), e);
            }
        }
    };
}

/// Assert that a [`Result`] is [`Err`] and matches an error pattern.
#[macro_export]
macro_rules! assert_err {
    ( $x:expr, $expected:pat ) => {
        match $x {
            Err(e) => {
                if !matches!(e, $expected) {
                    panic!("Expected error {}: {:?}", stringify!($expected), e);
                }
            }
            Ok(v) => {
                panic!("Expected error {}, found {:?}", stringify!($expected), v)
            }
        }
    };
}

/// Assert that a `try_*` contract call failed with the given contract error.
///
/// Soroban `try_*` client functions return `Err(Ok(ContractError))` when the contract itself
/// returned the error, and `Err(Err(InvokeError))` when the host aborted the call.
///
/// ```rust,ignore
/// assert_contract_err!(client.try_confirm_change_request(&signer, &id), ContractError::DuplicateConfirmation);
/// ```
#[macro_export]
macro_rules! assert_contract_err {
    ($given:expr, $expected:expr) => {
        match $given {
            Ok(v) => panic!(
                "Expected error {:?}, got {:?} instead",
                stringify!($expected),
                v
            ),
            Err(e) => match e {
                Err(e) => panic!("Unexpected error {e:?}"),
                Ok(v) if v != $expected => {
                    panic!("Expected error {:?}, got {:?} instead", $expected, v)
                }
                _ => (),
            },
        }
    };
}

/// Assert that an [`Option`] is [`Some`] and return the contained value.
#[macro_export]
macro_rules! assert_some {
    ( $x:expr ) => {
        match $x {
            core::option::Option::Some(s) => s,
            core::option::Option::None => {
                panic!("Expected value when calling {}, got None", stringify!($x));
            }
        }
    };
}

/// Assert that a contract call succeeds when authorized by `caller` alone, and that the call
/// required exactly that authorization. Returns the call result.
///
/// ```rust,ignore
/// let id = assert_auth!(signer, client.add_validator_request(&signer, &new, &2));
/// ```
#[macro_export]
macro_rules! assert_auth {
    ($caller:expr, $client:ident . $method:ident ( $($arg:expr),* $(,)? )) => {{
        use soroban_sdk::IntoVal;

        // Evaluated up front so a caller expression like `client.owner()` does not reset the
        // recorded auths of the call under test.
        let caller = $caller.clone();

        paste::paste! {
        let result = $client
            .mock_auths(&[$crate::mock_auth!(
                caller,
                $client.$method($($arg),*)
            )])
            .[<try_ $method>]($($arg),*);
        }

        let result = match result {
            Ok(Ok(inner)) => inner,
            Ok(Err(err)) => panic!("Expected Ok result, but got a conversion error {:?}", err),
            Err(err) => panic!("Expected Ok result, but got an error {:?}", err),
        };

        assert_eq!(
            $client.env.auths(),
            std::vec![(
                caller,
                soroban_sdk::testutils::AuthorizedInvocation {
                    function: soroban_sdk::testutils::AuthorizedFunction::Contract((
                        $client.address.clone(),
                        soroban_sdk::Symbol::new(&$client.env, stringify!($method)),
                        ($($arg.clone(),)*).into_val(&$client.env)
                    )),
                    sub_invocations: std::vec![]
                }
            )]
        );

        result
    }};
}

/// Assert that a contract call fails when authorized by `caller` alone.
#[macro_export]
macro_rules! assert_auth_err {
    ($caller:expr, $client:ident . $method:ident ( $($arg:expr),* $(,)? )) => {{
        let caller = $caller.clone();

        paste::paste! {
        let call_result = $client
            .mock_auths(&[$crate::mock_auth!(
                caller,
                $client.$method($($arg),*)
            )])
            .[<try_ $method>]($($arg),*);
        }

        assert!(
            call_result.is_err(),
            "Expected an authorization failure, but got Ok result."
        );
    }};
}

/// Build a [`soroban_sdk::testutils::MockAuth`] for a client call, optionally with sub-invocations.
#[macro_export]
macro_rules! mock_auth {
    (
        $caller:expr,
        $client:ident . $method:ident ( $($arg:expr),* $(,)? ),
        $sub_invokes:expr
    ) => {{
        use soroban_sdk::IntoVal;

        soroban_sdk::testutils::MockAuth {
            address: &$caller,
            invoke: &soroban_sdk::testutils::MockAuthInvoke {
                contract: &$client.address,
                fn_name: &stringify!($method).replace("try_", ""),
                args: ($($arg.clone(),)*).into_val(&$client.env),
                sub_invokes: $sub_invokes,
            },
        }
    }};

    (
        $caller:expr,
        $client:ident . $method:ident ( $($arg:expr),* $(,)? )
    ) => {{
        $crate::mock_auth!($caller, $client.$method($($arg),*), &[])
    }};
}
