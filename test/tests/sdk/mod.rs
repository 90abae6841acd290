mod contracts_tests;
