pub use eat_the_pie::*;
/// This module was auto-generated with ethers-rs Abigen.
/// More information at: <https://github.com/gakonst/ethers-rs>
#[allow(
    clippy::enum_variant_names,
    clippy::too_many_arguments,
    clippy::upper_case_acronyms,
    clippy::type_complexity,
    dead_code,
    non_camel_case_types,
)]
pub mod eat_the_pie {
    #[allow(deprecated)]
    fn __abi() -> ::ethers::core::abi::Abi {
        ::ethers::core::abi::ethabi::Contract {
            constructor: ::core::option::Option::None,
            functions: ::core::convert::From::from([
                (
                    ::std::borrow::ToOwned::to_owned("buyTickets"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("buyTickets"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("tickets"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::FixedArray(
                                                ::std::boxed::Box::new(
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                                ),
                                                4usize,
                                            ),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256[4][]"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::Payable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("calculatePayouts"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("calculatePayouts"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("gameId"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("changeDifficulty"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("changeDifficulty"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("claimPrize"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("claimPrize"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("gameId"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("consecutiveJackpotGames"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned(
                                "consecutiveJackpotGames",
                            ),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("consecutiveNonJackpotGames"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned(
                                "consecutiveNonJackpotGames",
                            ),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("gamePayouts"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("gamePayouts"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("gameStartBlock"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("gameStartBlock"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getCurrentGameInfo"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("getCurrentGameInfo"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("gameNumber"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("difficulty"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned(
                                            "enum EatThePie.Difficulty",
                                        ),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("prizePool"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("drawTime"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("timeUntilDraw"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getDetailedGameInfo"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned(
                                "getDetailedGameInfo",
                            ),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("gameId"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::FixedArray(
                                                ::std::boxed::Box::new(
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                                ),
                                                4usize,
                                            ),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(8usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                            ::ethers::core::abi::ethabi::ParamType::FixedArray(
                                                ::std::boxed::Box::new(
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                                ),
                                                3usize,
                                            ),
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned(
                                            "struct EatThePie.GameInfo",
                                        ),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("getUserGameWinnings"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned(
                                "getUserGameWinnings",
                            ),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("gameId"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("user"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Address,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("address"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("goldWin"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Bool,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bool"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("silverWin"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Bool,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bool"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("bronzeWin"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Bool,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bool"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("totalPrize"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("claimed"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Bool,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bool"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("initiateDraw"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("initiateDraw"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("mintWinningNFT"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("mintWinningNFT"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("gameId"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("setRandom"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("setRandom"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("gameId"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("submitVDFProof"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("submitVDFProof"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("gameId"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("v"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                ::std::vec![
                                                    ::ethers::core::abi::ethabi::ParamType::Bytes,
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                                ],
                                            ),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct BigNumber[]"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("y"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Bytes,
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct BigNumber"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::NonPayable,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("ticketPrice"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("ticketPrice"),
                            inputs: ::std::vec![],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::string::String::new(),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
                (
                    ::std::borrow::ToOwned::to_owned("verifyPastGameVDF"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Function {
                            name: ::std::borrow::ToOwned::to_owned("verifyPastGameVDF"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("gameId"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("v"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Array(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Tuple(
                                                ::std::vec![
                                                    ::ethers::core::abi::ethabi::ParamType::Bytes,
                                                    ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                                ],
                                            ),
                                        ),
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct BigNumber[]"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("y"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Tuple(
                                        ::std::vec![
                                            ::ethers::core::abi::ethabi::ParamType::Bytes,
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                        ],
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("struct BigNumber"),
                                    ),
                                },
                            ],
                            outputs: ::std::vec![
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("calculatedNumbers"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::FixedArray(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                        ),
                                        4usize,
                                    ),
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("uint256[4]"),
                                    ),
                                },
                                ::ethers::core::abi::ethabi::Param {
                                    name: ::std::borrow::ToOwned::to_owned("isValid"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Bool,
                                    internal_type: ::core::option::Option::Some(
                                        ::std::borrow::ToOwned::to_owned("bool"),
                                    ),
                                },
                            ],
                            constant: ::core::option::Option::None,
                            state_mutability: ::ethers::core::abi::ethabi::StateMutability::View,
                        },
                    ],
                ),
            ]),
            events: ::core::convert::From::from([
                (
                    ::std::borrow::ToOwned::to_owned("TicketPurchased"),
                    ::std::vec![
                        ::ethers::core::abi::ethabi::Event {
                            name: ::std::borrow::ToOwned::to_owned("TicketPurchased"),
                            inputs: ::std::vec![
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("player"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Address,
                                    indexed: true,
                                },
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("gameNumber"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    indexed: false,
                                },
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("numbers"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::FixedArray(
                                        ::std::boxed::Box::new(
                                            ::ethers::core::abi::ethabi::ParamType::Uint(256usize),
                                        ),
                                        3usize,
                                    ),
                                    indexed: false,
                                },
                                ::ethers::core::abi::ethabi::EventParam {
                                    name: ::std::borrow::ToOwned::to_owned("etherball"),
                                    kind: ::ethers::core::abi::ethabi::ParamType::Uint(
                                        256usize,
                                    ),
                                    indexed: false,
                                },
                            ],
                            anonymous: false,
                        },
                    ],
                ),
            ]),
            errors: ::std::collections::BTreeMap::new(),
            receive: false,
            fallback: false,
        }
    }
    ///The parsed JSON ABI of the contract.
    pub static EATTHEPIE_ABI: ::ethers::contract::Lazy<::ethers::core::abi::Abi> = ::ethers::contract::Lazy::new(
        __abi,
    );
    pub struct EatThePie<M>(::ethers::contract::Contract<M>);
    impl<M> ::core::clone::Clone for EatThePie<M> {
        fn clone(&self) -> Self {
            Self(::core::clone::Clone::clone(&self.0))
        }
    }
    impl<M> ::core::ops::Deref for EatThePie<M> {
        type Target = ::ethers::contract::Contract<M>;
        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }
    impl<M> ::core::ops::DerefMut for EatThePie<M> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.0
        }
    }
    impl<M> ::core::fmt::Debug for EatThePie<M> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            f.debug_tuple(::core::stringify!(EatThePie)).field(&self.address()).finish()
        }
    }
    impl<M: ::ethers::providers::Middleware> EatThePie<M> {
        /// Creates a new contract instance with the specified `ethers` client at
        /// `address`. The contract derefs to a `ethers::Contract` object.
        pub fn new<T: Into<::ethers::core::types::Address>>(
            address: T,
            client: ::std::sync::Arc<M>,
        ) -> Self {
            Self(
                ::ethers::contract::Contract::new(
                    address.into(),
                    EATTHEPIE_ABI.clone(),
                    client,
                ),
            )
        }
        ///Calls the contract's `buyTickets` (0x481e7346) function
        pub fn buy_tickets(
            &self,
            tickets: ::std::vec::Vec<[::ethers::core::types::U256; 4]>,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([72, 30, 115, 70], tickets)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `calculatePayouts` (0xe5a4e941) function
        pub fn calculate_payouts(
            &self,
            game_id: ::ethers::core::types::U256,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([229, 164, 233, 65], game_id)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `changeDifficulty` (0x30dd5139) function
        pub fn change_difficulty(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([48, 221, 81, 57], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `claimPrize` (0xd7098154) function
        pub fn claim_prize(
            &self,
            game_id: ::ethers::core::types::U256,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([215, 9, 129, 84], game_id)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `consecutiveJackpotGames` (0x6421512c) function
        pub fn consecutive_jackpot_games(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([100, 33, 81, 44], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `consecutiveNonJackpotGames` (0xe965fa41) function
        pub fn consecutive_non_jackpot_games(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([233, 101, 250, 65], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `gamePayouts` (0x18c7c29a) function
        pub fn game_payouts(
            &self,
            p0: ::ethers::core::types::U256,
            p1: ::ethers::core::types::U256,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([24, 199, 194, 154], (p0, p1))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `gameStartBlock` (0xc85e5ac7) function
        pub fn game_start_block(
            &self,
            p0: ::ethers::core::types::U256,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([200, 94, 90, 199], p0)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getCurrentGameInfo` (0xa645e840) function
        pub fn get_current_game_info(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<
            M,
            (
                ::ethers::core::types::U256,
                u8,
                ::ethers::core::types::U256,
                ::ethers::core::types::U256,
                ::ethers::core::types::U256,
            ),
        > {
            self.0
                .method_hash([166, 69, 232, 64], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getDetailedGameInfo` (0x592b1404) function
        pub fn get_detailed_game_info(
            &self,
            game_id: ::ethers::core::types::U256,
        ) -> ::ethers::contract::builders::ContractCall<M, GameInfo> {
            self.0
                .method_hash([89, 43, 20, 4], game_id)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `getUserGameWinnings` (0x7dc6f57c) function
        pub fn get_user_game_winnings(
            &self,
            game_id: ::ethers::core::types::U256,
            user: ::ethers::core::types::Address,
        ) -> ::ethers::contract::builders::ContractCall<
            M,
            (bool, bool, bool, ::ethers::core::types::U256, bool),
        > {
            self.0
                .method_hash([125, 198, 245, 124], (game_id, user))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `initiateDraw` (0xa35f624b) function
        pub fn initiate_draw(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([163, 95, 98, 75], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `mintWinningNFT` (0x4eb81875) function
        pub fn mint_winning_nft(
            &self,
            game_id: ::ethers::core::types::U256,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([78, 184, 24, 117], game_id)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `setRandom` (0x729e7cf6) function
        pub fn set_random(
            &self,
            game_id: ::ethers::core::types::U256,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([114, 158, 124, 246], game_id)
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `submitVDFProof` (0xd843aad2) function
        pub fn submit_vdf_proof(
            &self,
            game_id: ::ethers::core::types::U256,
            v: ::std::vec::Vec<BigNumber>,
            y: BigNumber,
        ) -> ::ethers::contract::builders::ContractCall<M, ()> {
            self.0
                .method_hash([216, 67, 170, 210], (game_id, v, y))
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `ticketPrice` (0x1209b1f6) function
        pub fn ticket_price(
            &self,
        ) -> ::ethers::contract::builders::ContractCall<M, ::ethers::core::types::U256> {
            self.0
                .method_hash([18, 9, 177, 246], ())
                .expect("method not found (this should never happen)")
        }
        ///Calls the contract's `verifyPastGameVDF` (0x625d4363) function
        pub fn verify_past_game_vdf(
            &self,
            game_id: ::ethers::core::types::U256,
            v: ::std::vec::Vec<BigNumber>,
            y: BigNumber,
        ) -> ::ethers::contract::builders::ContractCall<
            M,
            ([::ethers::core::types::U256; 4], bool),
        > {
            self.0
                .method_hash([98, 93, 67, 99], (game_id, v, y))
                .expect("method not found (this should never happen)")
        }
        ///Gets the contract's `TicketPurchased` event
        pub fn ticket_purchased_filter(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            TicketPurchasedFilter,
        > {
            self.0.event()
        }
        /// Returns an `Event` builder for all the events of this contract.
        pub fn events(
            &self,
        ) -> ::ethers::contract::builders::Event<
            ::std::sync::Arc<M>,
            M,
            TicketPurchasedFilter,
        > {
            self.0.event_with_filter(::core::default::Default::default())
        }
    }
    impl<M: ::ethers::providers::Middleware> From<::ethers::contract::Contract<M>>
    for EatThePie<M> {
        fn from(contract: ::ethers::contract::Contract<M>) -> Self {
            Self::new(contract.address(), contract.client())
        }
    }
    #[derive(
        Clone,
        ::ethers::contract::EthEvent,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethevent(
        name = "TicketPurchased",
        abi = "TicketPurchased(address,uint256,uint256[3],uint256)"
    )]
    pub struct TicketPurchasedFilter {
        #[ethevent(indexed)]
        pub player: ::ethers::core::types::Address,
        pub game_number: ::ethers::core::types::U256,
        pub numbers: [::ethers::core::types::U256; 3],
        pub etherball: ::ethers::core::types::U256,
    }
    ///Container type for all input parameters for the `buyTickets` function with signature `buyTickets(uint256[4][])` and selector `0x481e7346`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "buyTickets", abi = "buyTickets(uint256[4][])")]
    pub struct BuyTicketsCall {
        pub tickets: ::std::vec::Vec<[::ethers::core::types::U256; 4]>,
    }
    ///Container type for all input parameters for the `calculatePayouts` function with signature `calculatePayouts(uint256)` and selector `0xe5a4e941`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "calculatePayouts", abi = "calculatePayouts(uint256)")]
    pub struct CalculatePayoutsCall {
        pub game_id: ::ethers::core::types::U256,
    }
    ///Container type for all input parameters for the `changeDifficulty` function with signature `changeDifficulty()` and selector `0x30dd5139`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "changeDifficulty", abi = "changeDifficulty()")]
    pub struct ChangeDifficultyCall;
    ///Container type for all input parameters for the `claimPrize` function with signature `claimPrize(uint256)` and selector `0xd7098154`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "claimPrize", abi = "claimPrize(uint256)")]
    pub struct ClaimPrizeCall {
        pub game_id: ::ethers::core::types::U256,
    }
    ///Container type for all input parameters for the `consecutiveJackpotGames` function with signature `consecutiveJackpotGames()` and selector `0x6421512c`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "consecutiveJackpotGames", abi = "consecutiveJackpotGames()")]
    pub struct ConsecutiveJackpotGamesCall;
    ///Container type for all input parameters for the `consecutiveNonJackpotGames` function with signature `consecutiveNonJackpotGames()` and selector `0xe965fa41`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "consecutiveNonJackpotGames", abi = "consecutiveNonJackpotGames()")]
    pub struct ConsecutiveNonJackpotGamesCall;
    ///Container type for all input parameters for the `gamePayouts` function with signature `gamePayouts(uint256,uint256)` and selector `0x18c7c29a`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "gamePayouts", abi = "gamePayouts(uint256,uint256)")]
    pub struct GamePayoutsCall(
        pub ::ethers::core::types::U256,
        pub ::ethers::core::types::U256,
    );
    ///Container type for all input parameters for the `gameStartBlock` function with signature `gameStartBlock(uint256)` and selector `0xc85e5ac7`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "gameStartBlock", abi = "gameStartBlock(uint256)")]
    pub struct GameStartBlockCall(pub ::ethers::core::types::U256);
    ///Container type for all input parameters for the `getCurrentGameInfo` function with signature `getCurrentGameInfo()` and selector `0xa645e840`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getCurrentGameInfo", abi = "getCurrentGameInfo()")]
    pub struct GetCurrentGameInfoCall;
    ///Container type for all input parameters for the `getDetailedGameInfo` function with signature `getDetailedGameInfo(uint256)` and selector `0x592b1404`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "getDetailedGameInfo", abi = "getDetailedGameInfo(uint256)")]
    pub struct GetDetailedGameInfoCall {
        pub game_id: ::ethers::core::types::U256,
    }
    ///Container type for all input parameters for the `getUserGameWinnings` function with signature `getUserGameWinnings(uint256,address)` and selector `0x7dc6f57c`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(
        name = "getUserGameWinnings",
        abi = "getUserGameWinnings(uint256,address)"
    )]
    pub struct GetUserGameWinningsCall {
        pub game_id: ::ethers::core::types::U256,
        pub user: ::ethers::core::types::Address,
    }
    ///Container type for all input parameters for the `initiateDraw` function with signature `initiateDraw()` and selector `0xa35f624b`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "initiateDraw", abi = "initiateDraw()")]
    pub struct InitiateDrawCall;
    ///Container type for all input parameters for the `mintWinningNFT` function with signature `mintWinningNFT(uint256)` and selector `0x4eb81875`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "mintWinningNFT", abi = "mintWinningNFT(uint256)")]
    pub struct MintWinningNFTCall {
        pub game_id: ::ethers::core::types::U256,
    }
    ///Container type for all input parameters for the `setRandom` function with signature `setRandom(uint256)` and selector `0x729e7cf6`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "setRandom", abi = "setRandom(uint256)")]
    pub struct SetRandomCall {
        pub game_id: ::ethers::core::types::U256,
    }
    ///Container type for all input parameters for the `submitVDFProof` function with signature `submitVDFProof(uint256,(bytes,uint256)[],(bytes,uint256))` and selector `0xd843aad2`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(
        name = "submitVDFProof",
        abi = "submitVDFProof(uint256,(bytes,uint256)[],(bytes,uint256))"
    )]
    pub struct SubmitVDFProofCall {
        pub game_id: ::ethers::core::types::U256,
        pub v: ::std::vec::Vec<BigNumber>,
        pub y: BigNumber,
    }
    ///Container type for all input parameters for the `ticketPrice` function with signature `ticketPrice()` and selector `0x1209b1f6`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(name = "ticketPrice", abi = "ticketPrice()")]
    pub struct TicketPriceCall;
    ///Container type for all input parameters for the `verifyPastGameVDF` function with signature `verifyPastGameVDF(uint256,(bytes,uint256)[],(bytes,uint256))` and selector `0x625d4363`
    #[derive(
        Clone,
        ::ethers::contract::EthCall,
        ::ethers::contract::EthDisplay,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    #[ethcall(
        name = "verifyPastGameVDF",
        abi = "verifyPastGameVDF(uint256,(bytes,uint256)[],(bytes,uint256))"
    )]
    pub struct VerifyPastGameVDFCall {
        pub game_id: ::ethers::core::types::U256,
        pub v: ::std::vec::Vec<BigNumber>,
        pub y: BigNumber,
    }
    ///Container type for all of the contract's call
    #[derive(Clone, ::ethers::contract::EthAbiType, Debug, PartialEq, Eq, Hash)]
    pub enum EatThePieCalls {
        BuyTickets(BuyTicketsCall),
        CalculatePayouts(CalculatePayoutsCall),
        ChangeDifficulty(ChangeDifficultyCall),
        ClaimPrize(ClaimPrizeCall),
        ConsecutiveJackpotGames(ConsecutiveJackpotGamesCall),
        ConsecutiveNonJackpotGames(ConsecutiveNonJackpotGamesCall),
        GamePayouts(GamePayoutsCall),
        GameStartBlock(GameStartBlockCall),
        GetCurrentGameInfo(GetCurrentGameInfoCall),
        GetDetailedGameInfo(GetDetailedGameInfoCall),
        GetUserGameWinnings(GetUserGameWinningsCall),
        InitiateDraw(InitiateDrawCall),
        MintWinningNFT(MintWinningNFTCall),
        SetRandom(SetRandomCall),
        SubmitVDFProof(SubmitVDFProofCall),
        TicketPrice(TicketPriceCall),
        VerifyPastGameVDF(VerifyPastGameVDFCall),
    }
    impl ::ethers::core::abi::AbiDecode for EatThePieCalls {
        fn decode(
            data: impl AsRef<[u8]>,
        ) -> ::core::result::Result<Self, ::ethers::core::abi::AbiError> {
            let data = data.as_ref();
            if let Ok(decoded) = <BuyTicketsCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::BuyTickets(decoded));
            }
            if let Ok(decoded) = <CalculatePayoutsCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::CalculatePayouts(decoded));
            }
            if let Ok(decoded) = <ChangeDifficultyCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::ChangeDifficulty(decoded));
            }
            if let Ok(decoded) = <ClaimPrizeCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::ClaimPrize(decoded));
            }
            if let Ok(decoded) = <ConsecutiveJackpotGamesCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::ConsecutiveJackpotGames(decoded));
            }
            if let Ok(decoded) = <ConsecutiveNonJackpotGamesCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::ConsecutiveNonJackpotGames(decoded));
            }
            if let Ok(decoded) = <GamePayoutsCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GamePayouts(decoded));
            }
            if let Ok(decoded) = <GameStartBlockCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GameStartBlock(decoded));
            }
            if let Ok(decoded) = <GetCurrentGameInfoCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetCurrentGameInfo(decoded));
            }
            if let Ok(decoded) = <GetDetailedGameInfoCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetDetailedGameInfo(decoded));
            }
            if let Ok(decoded) = <GetUserGameWinningsCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::GetUserGameWinnings(decoded));
            }
            if let Ok(decoded) = <InitiateDrawCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::InitiateDraw(decoded));
            }
            if let Ok(decoded) = <MintWinningNFTCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::MintWinningNFT(decoded));
            }
            if let Ok(decoded) = <SetRandomCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SetRandom(decoded));
            }
            if let Ok(decoded) = <SubmitVDFProofCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::SubmitVDFProof(decoded));
            }
            if let Ok(decoded) = <TicketPriceCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::TicketPrice(decoded));
            }
            if let Ok(decoded) = <VerifyPastGameVDFCall as ::ethers::core::abi::AbiDecode>::decode(
                data,
            ) {
                return Ok(Self::VerifyPastGameVDF(decoded));
            }
            Err(::ethers::core::abi::Error::InvalidData.into())
        }
    }
    impl ::ethers::core::abi::AbiEncode for EatThePieCalls {
        fn encode(self) -> Vec<u8> {
            match self {
                Self::BuyTickets(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::CalculatePayouts(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::ChangeDifficulty(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::ClaimPrize(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::ConsecutiveJackpotGames(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::ConsecutiveNonJackpotGames(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GamePayouts(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GameStartBlock(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetCurrentGameInfo(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetDetailedGameInfo(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::GetUserGameWinnings(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::InitiateDraw(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::MintWinningNFT(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SetRandom(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::SubmitVDFProof(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::TicketPrice(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
                Self::VerifyPastGameVDF(element) => {
                    ::ethers::core::abi::AbiEncode::encode(element)
                }
            }
        }
    }
    impl ::core::fmt::Display for EatThePieCalls {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            match self {
                Self::BuyTickets(element) => ::core::fmt::Display::fmt(element, f),
                Self::CalculatePayouts(element) => ::core::fmt::Display::fmt(element, f),
                Self::ChangeDifficulty(element) => ::core::fmt::Display::fmt(element, f),
                Self::ClaimPrize(element) => ::core::fmt::Display::fmt(element, f),
                Self::ConsecutiveJackpotGames(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::ConsecutiveNonJackpotGames(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::GamePayouts(element) => ::core::fmt::Display::fmt(element, f),
                Self::GameStartBlock(element) => ::core::fmt::Display::fmt(element, f),
                Self::GetCurrentGameInfo(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::GetDetailedGameInfo(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::GetUserGameWinnings(element) => {
                    ::core::fmt::Display::fmt(element, f)
                }
                Self::InitiateDraw(element) => ::core::fmt::Display::fmt(element, f),
                Self::MintWinningNFT(element) => ::core::fmt::Display::fmt(element, f),
                Self::SetRandom(element) => ::core::fmt::Display::fmt(element, f),
                Self::SubmitVDFProof(element) => ::core::fmt::Display::fmt(element, f),
                Self::TicketPrice(element) => ::core::fmt::Display::fmt(element, f),
                Self::VerifyPastGameVDF(element) => ::core::fmt::Display::fmt(element, f),
            }
        }
    }
    impl ::core::convert::From<BuyTicketsCall> for EatThePieCalls {
        fn from(value: BuyTicketsCall) -> Self {
            Self::BuyTickets(value)
        }
    }
    impl ::core::convert::From<CalculatePayoutsCall> for EatThePieCalls {
        fn from(value: CalculatePayoutsCall) -> Self {
            Self::CalculatePayouts(value)
        }
    }
    impl ::core::convert::From<ChangeDifficultyCall> for EatThePieCalls {
        fn from(value: ChangeDifficultyCall) -> Self {
            Self::ChangeDifficulty(value)
        }
    }
    impl ::core::convert::From<ClaimPrizeCall> for EatThePieCalls {
        fn from(value: ClaimPrizeCall) -> Self {
            Self::ClaimPrize(value)
        }
    }
    impl ::core::convert::From<ConsecutiveJackpotGamesCall> for EatThePieCalls {
        fn from(value: ConsecutiveJackpotGamesCall) -> Self {
            Self::ConsecutiveJackpotGames(value)
        }
    }
    impl ::core::convert::From<ConsecutiveNonJackpotGamesCall> for EatThePieCalls {
        fn from(value: ConsecutiveNonJackpotGamesCall) -> Self {
            Self::ConsecutiveNonJackpotGames(value)
        }
    }
    impl ::core::convert::From<GamePayoutsCall> for EatThePieCalls {
        fn from(value: GamePayoutsCall) -> Self {
            Self::GamePayouts(value)
        }
    }
    impl ::core::convert::From<GameStartBlockCall> for EatThePieCalls {
        fn from(value: GameStartBlockCall) -> Self {
            Self::GameStartBlock(value)
        }
    }
    impl ::core::convert::From<GetCurrentGameInfoCall> for EatThePieCalls {
        fn from(value: GetCurrentGameInfoCall) -> Self {
            Self::GetCurrentGameInfo(value)
        }
    }
    impl ::core::convert::From<GetDetailedGameInfoCall> for EatThePieCalls {
        fn from(value: GetDetailedGameInfoCall) -> Self {
            Self::GetDetailedGameInfo(value)
        }
    }
    impl ::core::convert::From<GetUserGameWinningsCall> for EatThePieCalls {
        fn from(value: GetUserGameWinningsCall) -> Self {
            Self::GetUserGameWinnings(value)
        }
    }
    impl ::core::convert::From<InitiateDrawCall> for EatThePieCalls {
        fn from(value: InitiateDrawCall) -> Self {
            Self::InitiateDraw(value)
        }
    }
    impl ::core::convert::From<MintWinningNFTCall> for EatThePieCalls {
        fn from(value: MintWinningNFTCall) -> Self {
            Self::MintWinningNFT(value)
        }
    }
    impl ::core::convert::From<SetRandomCall> for EatThePieCalls {
        fn from(value: SetRandomCall) -> Self {
            Self::SetRandom(value)
        }
    }
    impl ::core::convert::From<SubmitVDFProofCall> for EatThePieCalls {
        fn from(value: SubmitVDFProofCall) -> Self {
            Self::SubmitVDFProof(value)
        }
    }
    impl ::core::convert::From<TicketPriceCall> for EatThePieCalls {
        fn from(value: TicketPriceCall) -> Self {
            Self::TicketPrice(value)
        }
    }
    impl ::core::convert::From<VerifyPastGameVDFCall> for EatThePieCalls {
        fn from(value: VerifyPastGameVDFCall) -> Self {
            Self::VerifyPastGameVDF(value)
        }
    }
    ///Container type for all return fields from the `consecutiveJackpotGames` function with signature `consecutiveJackpotGames()` and selector `0x6421512c`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct ConsecutiveJackpotGamesReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `consecutiveNonJackpotGames` function with signature `consecutiveNonJackpotGames()` and selector `0xe965fa41`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct ConsecutiveNonJackpotGamesReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `gamePayouts` function with signature `gamePayouts(uint256,uint256)` and selector `0x18c7c29a`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GamePayoutsReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `gameStartBlock` function with signature `gameStartBlock(uint256)` and selector `0xc85e5ac7`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GameStartBlockReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `getCurrentGameInfo` function with signature `getCurrentGameInfo()` and selector `0xa645e840`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetCurrentGameInfoReturn {
        pub game_number: ::ethers::core::types::U256,
        pub difficulty: u8,
        pub prize_pool: ::ethers::core::types::U256,
        pub draw_time: ::ethers::core::types::U256,
        pub time_until_draw: ::ethers::core::types::U256,
    }
    ///Container type for all return fields from the `getDetailedGameInfo` function with signature `getDetailedGameInfo(uint256)` and selector `0x592b1404`
    #[derive(Clone, ::ethers::contract::EthAbiType, ::ethers::contract::EthAbiCodec)]
    pub struct GetDetailedGameInfoReturn(pub GameInfo);
    ///Container type for all return fields from the `getUserGameWinnings` function with signature `getUserGameWinnings(uint256,address)` and selector `0x7dc6f57c`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GetUserGameWinningsReturn {
        pub gold_win: bool,
        pub silver_win: bool,
        pub bronze_win: bool,
        pub total_prize: ::ethers::core::types::U256,
        pub claimed: bool,
    }
    ///Container type for all return fields from the `ticketPrice` function with signature `ticketPrice()` and selector `0x1209b1f6`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct TicketPriceReturn(pub ::ethers::core::types::U256);
    ///Container type for all return fields from the `verifyPastGameVDF` function with signature `verifyPastGameVDF(uint256,(bytes,uint256)[],(bytes,uint256))` and selector `0x625d4363`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct VerifyPastGameVDFReturn {
        pub calculated_numbers: [::ethers::core::types::U256; 4],
        pub is_valid: bool,
    }
    ///`BigNumber(bytes,uint256)`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct BigNumber {
        pub val: ::ethers::core::types::Bytes,
        pub bitlen: ::ethers::core::types::U256,
    }
    ///`GameInfo(uint256,uint8,uint256,uint256,uint256,uint256,uint256,uint256[4],uint8,uint256,uint256,uint256,uint256[3])`
    #[derive(
        Clone,
        ::ethers::contract::EthAbiType,
        ::ethers::contract::EthAbiCodec,
        Default,
        Debug,
        PartialEq,
        Eq,
        Hash
    )]
    pub struct GameInfo {
        pub game_id: ::ethers::core::types::U256,
        pub status: u8,
        pub prize_pool: ::ethers::core::types::U256,
        pub number_of_winners: ::ethers::core::types::U256,
        pub gold_winners: ::ethers::core::types::U256,
        pub silver_winners: ::ethers::core::types::U256,
        pub bronze_winners: ::ethers::core::types::U256,
        pub winning_numbers: [::ethers::core::types::U256; 4],
        pub difficulty: u8,
        pub draw_initiated_block: ::ethers::core::types::U256,
        pub randao_block: ::ethers::core::types::U256,
        pub randao_value: ::ethers::core::types::U256,
        pub payouts: [::ethers::core::types::U256; 3],
    }
}
