/*!
# `REM <anything>`

## Purpose
Hold a remark for the human reader.

## Remarks
Everything to the end of the line is ignored, colons included. An
apostrophe does the same thing: `' like this`.

*/
