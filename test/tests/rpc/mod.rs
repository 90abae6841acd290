mod eth_client_tests;
