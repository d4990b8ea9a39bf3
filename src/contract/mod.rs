/*!
   Wire messages for the counter contract under test.
*/

pub mod msg;
