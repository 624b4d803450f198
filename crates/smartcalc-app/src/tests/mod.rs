mod voice_tests;
