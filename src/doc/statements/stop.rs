/*!
# `STOP`

## Purpose
Halt the program, same as `END`.

*/
